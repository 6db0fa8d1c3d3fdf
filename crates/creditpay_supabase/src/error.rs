//! Error types for the Supabase client

use creditpay_common::CreditpayError;
use thiserror::Error;

/// Errors that can occur when talking to the Supabase REST layer
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Error from reqwest
    #[error("Supabase request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success response from PostgREST
    #[error("Supabase API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Response body did not match the expected rows
    #[error("Failed to parse Supabase response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Error with the Supabase configuration
    #[error("Supabase configuration error: {0}")]
    ConfigError(String),
}

impl From<SupabaseError> for CreditpayError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::RequestError(e) => {
                CreditpayError::HttpError(format!("Supabase request error: {}", e))
            }
            SupabaseError::ApiError {
                status_code,
                message,
            } => CreditpayError::DatabaseError(format!(
                "Status: {}, Message: {}",
                status_code, message
            )),
            SupabaseError::ParseError(e) => {
                CreditpayError::ParseError(format!("Supabase response parse error: {}", e))
            }
            SupabaseError::ConfigError(msg) => CreditpayError::ConfigError(msg),
        }
    }
}
