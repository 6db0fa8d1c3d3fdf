// --- File: crates/services/creditpay_backend/src/service_factory.rs ---
//! Wires the concrete Stripe and Supabase services into the checkout state.
use creditpay_checkout::CheckoutState;
use creditpay_common::{config_error, CreditpayError};
use creditpay_config::AppConfig;
use creditpay_stripe::StripeCheckoutService;
use creditpay_supabase::{SupabaseClient, SupabaseCreditStore};
use std::sync::Arc;
use tracing::info;

/// Builds the checkout state from the loaded configuration.
///
/// Both the `[stripe]` and the `[supabase]` sections are required.
pub fn build_checkout_state(config: &AppConfig) -> Result<Arc<CheckoutState>, CreditpayError> {
    let stripe_config = config
        .stripe
        .clone()
        .ok_or_else(|| config_error("Stripe configuration missing"))?;
    let supabase_config = config
        .supabase
        .clone()
        .ok_or_else(|| config_error("Supabase configuration missing"))?;

    info!(
        "Checkout wired: currency {}, payment method '{}'",
        config.checkout.currency, config.checkout.payment_method_code
    );

    Ok(Arc::new(CheckoutState {
        provider: Arc::new(StripeCheckoutService::new(stripe_config)),
        store: Arc::new(SupabaseCreditStore::new(SupabaseClient::new(
            supabase_config,
        ))),
        settings: config.checkout.clone(),
    }))
}
