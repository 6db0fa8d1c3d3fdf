// --- File: crates/creditpay_checkout/src/handlers.rs ---
use axum::{body::Bytes, extract::State, response::Json};
use creditpay_common::{CheckoutProvider, CreditStore};
use creditpay_config::CheckoutConfig;
use std::sync::Arc;
use tracing::error;

use crate::error::CheckoutError;
use crate::logic::{create_credit_checkout, CreateCreditCheckoutRequest, CreateCreditCheckoutResponse};

// --- State for Checkout Handlers ---
#[derive(Clone)]
pub struct CheckoutState {
    pub provider: Arc<dyn CheckoutProvider>,
    pub store: Arc<dyn CreditStore>,
    pub settings: CheckoutConfig,
}

/// Axum handler: buy a credit package through a hosted checkout page.
///
/// 200 `{url}` on success, 400 `{error: "Package not found"}` for an unknown
/// package, 500 `{error}` for anything else, an unreadable body included.
/// The body is decoded as JSON whatever its `Content-Type`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/stripe-payment", // Path relative to /api
    request_body = CreateCreditCheckoutRequest,
    responses(
        (status = 200, description = "Checkout session created", body = CreateCreditCheckoutResponse),
        (status = 400, description = "Package not found", body = crate::doc::CheckoutErrorBody),
        (status = 500, description = "Provider, database or request error", body = crate::doc::CheckoutErrorBody)
    ),
    tag = "Checkout"
))]
pub async fn create_credit_checkout_handler(
    State(state): State<Arc<CheckoutState>>,
    body: Bytes,
) -> Result<Json<CreateCreditCheckoutResponse>, CheckoutError> {
    let request: CreateCreditCheckoutRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("[Checkout] unreadable request body: {}", e);
        CheckoutError::InvalidRequest(format!("Invalid request body: {}", e))
    })?;

    create_credit_checkout(
        state.provider.as_ref(),
        state.store.as_ref(),
        &state.settings,
        request,
    )
    .await
    .map(Json)
    .inspect_err(|e| error!("[Checkout] failed: {}", e))
}
