// --- File: crates/creditpay_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all creditpay crates.
///
/// Integration crates keep their own error enums and convert into this one
/// through `From`, so the checkout flow only ever sees `CreditpayError`.
#[derive(Error, Debug)]
pub enum CreditpayError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during a database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during an external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CreditpayError {
    fn status_code(&self) -> u16 {
        match self {
            CreditpayError::HttpError(_) => 500,
            CreditpayError::ParseError(_) => 400,
            CreditpayError::ConfigError(_) => 500,
            CreditpayError::DatabaseError(_) => 500,
            CreditpayError::ExternalServiceError { .. } => 502,
            CreditpayError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for CreditpayError {
    fn from(err: reqwest::Error) -> Self {
        CreditpayError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for CreditpayError {
    fn from(err: serde_json::Error) -> Self {
        CreditpayError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> CreditpayError {
    CreditpayError::ConfigError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> CreditpayError {
    CreditpayError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_error_names_the_service() {
        let err = external_service_error("Stripe API", "Status: 402, Message: card declined");
        assert_eq!(
            err.to_string(),
            "External service error: Stripe API - Status: 402, Message: card declined"
        );
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn helper_constructors_map_to_expected_status() {
        assert_eq!(config_error("missing key").status_code(), 500);
        assert_eq!(
            CreditpayError::DatabaseError("duplicate key".into()).status_code(),
            500
        );
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let err: CreditpayError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, CreditpayError::ParseError(_)));
        assert_eq!(err.status_code(), 400);
    }
}
