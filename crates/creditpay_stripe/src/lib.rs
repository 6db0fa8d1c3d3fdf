// --- File: crates/creditpay_stripe/src/lib.rs ---

pub mod logic;
pub mod error;
pub mod service;

pub use logic::{build_checkout_form, create_checkout_session};
pub use error::StripeError; // Re-export the error type
pub use service::StripeCheckoutService; // Re-export the checkout provider
