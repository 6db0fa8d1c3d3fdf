// --- File: crates/creditpay_common/src/http.rs ---
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::HttpStatusCode;

// Include the client module
pub mod client;

/// Builds the JSON error body every endpoint returns: `{ "error": "<message>" }`.
///
/// Unknown status codes fall back to 500.
pub fn json_error_response(status_code: u16, message: impl Into<String>) -> Response {
    let status =
        StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Extension trait for errors to convert them to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl<E> IntoHttpResponse for E
where
    E: HttpStatusCode + fmt::Display,
{
    fn into_http_response(self) -> Response {
        json_error_response(self.status_code(), self.to_string())
    }
}
