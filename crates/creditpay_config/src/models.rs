// --- File: crates/creditpay_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Stripe Config ---
// Secret key is a `secret_from_env` marker in the config files: STRIPE_SECRET_KEY
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StripeConfig {
    #[serde(default = "default_stripe_api_base")]
    pub api_base: String,
    pub secret_key: String,
}

fn default_stripe_api_base() -> String {
    "https://api.stripe.com".to_string()
}

// --- Supabase Config ---
// Both values come from the environment: SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: String,
}

// --- Checkout Settings ---
/// Fixed values used when building a checkout session and its transaction row.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Currency stored on the transaction and (lowercased) sent to Stripe.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// `payment_methods.code` of the provider row transactions link to.
    #[serde(default = "default_payment_method_code")]
    pub payment_method_code: String,
    /// Payment method types offered on the hosted checkout page.
    #[serde(default = "default_payment_method_types")]
    pub payment_method_types: Vec<String>,
}

fn default_currency() -> String {
    "PLN".to_string()
}

fn default_payment_method_code() -> String {
    "stripe".to_string()
}

fn default_payment_method_types() -> Vec<String> {
    vec!["card".to_string(), "blik".to_string(), "p24".to_string()]
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            payment_method_code: default_payment_method_code(),
            payment_method_types: default_payment_method_types(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub stripe: Option<StripeConfig>,
    #[serde(default)]
    pub supabase: Option<SupabaseConfig>,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}
