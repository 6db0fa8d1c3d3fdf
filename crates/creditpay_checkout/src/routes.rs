// --- File: crates/creditpay_checkout/src/routes.rs ---

use crate::handlers::{create_credit_checkout_handler, CheckoutState};
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing the checkout endpoint.
pub fn routes(state: Arc<CheckoutState>) -> Router {
    Router::new()
        .route("/stripe-payment", post(create_credit_checkout_handler))
        .with_state(state)
}
