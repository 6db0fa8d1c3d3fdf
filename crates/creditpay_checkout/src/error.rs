// --- File: crates/creditpay_checkout/src/error.rs ---
use axum::response::{IntoResponse, Response};
use creditpay_common::{CreditpayError, HttpStatusCode, IntoHttpResponse};
use thiserror::Error;

/// Everything that can stop a checkout.
///
/// Only an unknown package is the caller's fault (400); every other variant
/// is reported as 500 with its message.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Package not found")]
    PackageNotFound,

    #[error("Payment method '{0}' not found")]
    PaymentMethodNotFound(String),

    /// The request body could not be read as a checkout request
    #[error("{0}")]
    InvalidRequest(String),

    /// The payment provider call failed
    #[error(transparent)]
    Provider(CreditpayError),

    /// A database call failed
    #[error(transparent)]
    Store(CreditpayError),
}

impl HttpStatusCode for CheckoutError {
    fn status_code(&self) -> u16 {
        match self {
            CheckoutError::PackageNotFound => 400,
            CheckoutError::PaymentMethodNotFound(_)
            | CheckoutError::InvalidRequest(_)
            | CheckoutError::Provider(_)
            | CheckoutError::Store(_) => 500,
        }
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
