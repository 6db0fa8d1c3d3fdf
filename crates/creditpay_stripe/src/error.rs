// --- File: crates/creditpay_stripe/src/error.rs ---
use creditpay_common::{
    CreditpayError,
    external_service_error,
};
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

/// Convert StripeError to CreditpayError
impl From<StripeError> for CreditpayError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::RequestError(e) => CreditpayError::HttpError(format!("Stripe request error: {}", e)),
            StripeError::ApiError { status_code, message } => external_service_error(
                "Stripe API",
                format!("Status: {}, Message: {}", status_code, message)
            ),
            StripeError::ParseError(e) => CreditpayError::ParseError(format!("Stripe response parse error: {}", e)),
            StripeError::ConfigError => CreditpayError::ConfigError("Stripe configuration missing or incomplete".to_string()),
            StripeError::InternalError(msg) => CreditpayError::InternalError(format!("Stripe internal error: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_stripe_message() {
        let err = StripeError::ApiError {
            status_code: 400,
            message: "Invalid currency: xyz".to_string(),
        };
        let common: CreditpayError = err.into();
        assert_eq!(
            common.to_string(),
            "External service error: Stripe API - Status: 400, Message: Invalid currency: xyz"
        );
    }

    #[test]
    fn config_error_converts_to_config_error() {
        let common: CreditpayError = StripeError::ConfigError.into();
        assert!(matches!(common, CreditpayError::ConfigError(_)));
    }
}
