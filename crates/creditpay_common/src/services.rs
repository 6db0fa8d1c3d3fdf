// --- File: crates/creditpay_common/src/services.rs ---
//! Service abstractions for the two external collaborators.
//!
//! The checkout flow talks to a payment provider and to the credits database
//! only through these traits, so the concrete HTTP clients can be swapped
//! for mocks in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CreditpayError;
use crate::models::{CreditPackage, PaymentMethod, PaymentTransaction, RecordId};

/// Everything needed to open a hosted checkout session for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionParams {
    /// e.g. `["card", "blik", "p24"]`
    pub payment_method_types: Vec<String>,
    /// ISO currency code as the provider expects it (lowercase for Stripe).
    pub currency: String,
    pub product_name: String,
    pub product_description: Option<String>,
    /// Price of one unit in the smallest currency unit.
    pub unit_amount: i64,
    pub quantity: u32,
    pub success_url: String,
    pub cancel_url: String,
    pub client_reference_id: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

/// The part of a provider checkout session the caller needs back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// A payment provider able to create hosted checkout sessions.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a one-time payment checkout session.
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, CreditpayError>;
}

/// Read/write access to the credit tables.
#[async_trait]
pub trait CreditStore: Send + Sync {
    /// Look up a credit package by id. `Ok(None)` when no row matches.
    async fn find_credit_package(
        &self,
        package_id: &RecordId,
    ) -> Result<Option<CreditPackage>, CreditpayError>;

    /// Look up a payment method by its code (e.g. "stripe").
    async fn find_payment_method(
        &self,
        code: &str,
    ) -> Result<Option<PaymentMethod>, CreditpayError>;

    /// Insert a new payment transaction row.
    async fn insert_payment_transaction(
        &self,
        transaction: &PaymentTransaction,
    ) -> Result<(), CreditpayError>;
}
