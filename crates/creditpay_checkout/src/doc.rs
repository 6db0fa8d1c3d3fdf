// --- File: crates/creditpay_checkout/src/doc.rs ---
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::logic::{CreateCreditCheckoutRequest, CreateCreditCheckoutResponse};
use creditpay_common::RecordId;

/// Body of every non-200 response.
#[derive(Serialize, ToSchema)]
pub struct CheckoutErrorBody {
    #[schema(example = "Package not found")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::create_credit_checkout_handler),
    components(
        schemas(
            CreateCreditCheckoutRequest,
            CreateCreditCheckoutResponse,
            CheckoutErrorBody,
            RecordId
        )
    ),
    tags(
        (name = "Checkout", description = "Credit package purchase via Stripe Checkout")
    )
)]
pub struct CheckoutApiDoc;
