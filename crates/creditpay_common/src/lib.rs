// --- File: crates/creditpay_common/src/lib.rs ---

// Declare modules within this crate
pub mod models;    // Domain rows shared by the store and the checkout flow
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Service abstractions
pub mod logging;   // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    CreditpayError,
    HttpStatusCode,
    config_error,
    external_service_error,
};

// Re-export HTTP utilities for easier access
pub use http::{
    json_error_response,
    IntoHttpResponse,
    client::{
        HTTP_CLIENT,
        create_client,
    },
};

// Re-export the domain models and service traits
pub use models::{CreditPackage, PaymentMethod, PaymentTransaction, RecordId, TransactionStatus};
pub use services::{CheckoutProvider, CheckoutSession, CheckoutSessionParams, CreditStore};

// This crate provides the functionality shared by the integration crates and
// the checkout flow: errors, HTTP plumbing, logging and the service seams.
