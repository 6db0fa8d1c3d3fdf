// --- File: crates/creditpay_checkout/src/lib.rs ---

pub mod logic;
pub mod handlers;
pub mod routes;
pub mod error;
#[cfg(feature = "openapi")]
pub mod doc;

// Re-export for main backend
pub use routes::routes;
pub use logic::{create_credit_checkout, CreateCreditCheckoutRequest, CreateCreditCheckoutResponse};
pub use handlers::CheckoutState;
pub use error::CheckoutError;
