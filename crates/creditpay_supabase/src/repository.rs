//! [`CreditStore`] backed by the Supabase REST layer.

use async_trait::async_trait;
use creditpay_common::{
    CreditPackage, CreditStore, CreditpayError, PaymentMethod, PaymentTransaction, RecordId,
};
use tracing::info;

use crate::client::SupabaseClient;
use crate::models::{CREDIT_PACKAGES_TABLE, PAYMENT_METHODS_TABLE, PAYMENT_TRANSACTIONS_TABLE};

pub struct SupabaseCreditStore {
    client: SupabaseClient,
}

impl SupabaseCreditStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CreditStore for SupabaseCreditStore {
    async fn find_credit_package(
        &self,
        package_id: &RecordId,
    ) -> Result<Option<CreditPackage>, CreditpayError> {
        let rows: Vec<CreditPackage> = self
            .client
            .select_eq(CREDIT_PACKAGES_TABLE, "id", &package_id.to_string())
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn find_payment_method(
        &self,
        code: &str,
    ) -> Result<Option<PaymentMethod>, CreditpayError> {
        let rows: Vec<PaymentMethod> = self
            .client
            .select_eq(PAYMENT_METHODS_TABLE, "code", code)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_payment_transaction(
        &self,
        transaction: &PaymentTransaction,
    ) -> Result<(), CreditpayError> {
        self.client
            .insert(PAYMENT_TRANSACTIONS_TABLE, transaction)
            .await?;
        info!(
            "Recorded {:?} transaction for session {}",
            transaction.status, transaction.external_transaction_id
        );
        Ok(())
    }
}
