// --- File: crates/creditpay_common/src/models.rs ---

// Rows read from and written to the credits database. The database owns
// these tables; this crate only mirrors the columns the checkout flow uses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary/foreign key value as it appears in the database REST layer.
///
/// Tables may key rows by integers or by strings (UUIDs), so the value keeps
/// whatever JSON type it arrived with and writes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// A purchasable bundle of credits (`credit_packages`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub id: RecordId,
    pub name: String,
    pub credits: i64,
    /// Price in the major currency unit, e.g. 9.99
    pub price: f64,
}

/// A row of the `payment_methods` lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: RecordId,
    pub code: String,
}

/// Lifecycle of a payment transaction. Only `Pending` is written here; the
/// other states are set by whoever reconciles the provider's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// A row inserted into `payment_transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub user_id: RecordId,
    pub payment_method_id: RecordId,
    pub credit_package_id: RecordId,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub external_transaction_id: String,
    pub payment_data: serde_json::Value,
}
