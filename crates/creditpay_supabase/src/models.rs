//! Table names and PostgREST wire types.

use serde::Deserialize;

pub const CREDIT_PACKAGES_TABLE: &str = "credit_packages";
pub const PAYMENT_METHODS_TABLE: &str = "payment_methods";
pub const PAYMENT_TRANSACTIONS_TABLE: &str = "payment_transactions";

/// Error body PostgREST returns on failure.
#[derive(Debug, Deserialize)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
