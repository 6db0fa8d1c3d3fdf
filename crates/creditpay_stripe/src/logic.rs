// --- File: crates/creditpay_stripe/src/logic.rs ---
use creditpay_common::{CheckoutSession, CheckoutSessionParams};
use creditpay_config::{env_vars::SECRET_MARKER, StripeConfig};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::StripeError;

/// Path of the Checkout Sessions endpoint, relative to `StripeConfig::api_base`.
pub const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

// Response FROM Stripe API when creating a session
#[derive(Deserialize, Debug)]
struct StripeCheckoutSessionApiResponse {
    pub id: String,
    pub url: Option<String>,
}

/// Encodes the session parameters the way Stripe expects form bodies:
/// bracketed keys for arrays (`payment_method_types[]`) and nested objects
/// (`line_items[0][price_data][unit_amount]`).
pub fn build_checkout_form(params: &CheckoutSessionParams) -> Vec<(String, String)> {
    let mut form_body: Vec<(String, String)> = params
        .payment_method_types
        .iter()
        .map(|method| ("payment_method_types[]".to_string(), method.clone()))
        .collect();

    form_body.extend([
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), params.success_url.clone()),
        ("cancel_url".to_string(), params.cancel_url.clone()),
        (
            "line_items[0][price_data][currency]".to_string(),
            params.currency.to_lowercase(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            params.product_name.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            params.unit_amount.to_string(),
        ),
        (
            "line_items[0][quantity]".to_string(),
            params.quantity.to_string(),
        ),
    ]);

    if let Some(description) = &params.product_description {
        form_body.push((
            "line_items[0][price_data][product_data][description]".to_string(),
            description.clone(),
        ));
    }
    if let Some(client_ref_id) = &params.client_reference_id {
        form_body.push(("client_reference_id".to_string(), client_ref_id.clone()));
    }
    for (key, value) in &params.metadata {
        form_body.push((format!("metadata[{}]", key), value.clone()));
    }

    form_body
}

/// Creates a Stripe Checkout Session.
pub async fn create_checkout_session(
    client: &Client,
    stripe_config: &StripeConfig,
    params: &CheckoutSessionParams,
) -> Result<CheckoutSession, StripeError> {
    info!(
        "[Stripe Logic] Creating Checkout Session: product='{}', amount={} {}",
        params.product_name, params.unit_amount, params.currency
    );

    let secret_key = stripe_config.secret_key.as_str();
    if secret_key.is_empty() || secret_key == SECRET_MARKER {
        error!("[Stripe Logic] Stripe secret key is not set");
        return Err(StripeError::ConfigError);
    }

    let api_url = format!(
        "{}{}",
        stripe_config.api_base.trim_end_matches('/'),
        CHECKOUT_SESSIONS_PATH
    );
    let form_body = build_checkout_form(params);

    info!("[Stripe Logic] Sending request to Stripe API: {}", api_url);

    let response = client
        .post(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let stripe_response: StripeCheckoutSessionApiResponse = serde_json::from_str(&body_text)?;
        match stripe_response.url {
            Some(url) => {
                info!(
                    "[Stripe Logic] Checkout Session {} created. URL: {}",
                    stripe_response.id, url
                );
                Ok(CheckoutSession {
                    id: stripe_response.id,
                    url,
                })
            }
            None => {
                error!(
                    "[Stripe Logic] Stripe response missing checkout session URL: {}",
                    body_text
                );
                Err(StripeError::InternalError(
                    "Stripe response missing checkout URL".to_string(),
                ))
            }
        }
    } else {
        let error_message = extract_error_message(body_text);
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

/// Stripe reports failures as `{"error": {"message": "..."}}`; anything else
/// is passed through as the raw body.
fn extract_error_message(body_text: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(body_text),
        Err(_) => body_text,
    }
}
