#![allow(dead_code)]

use async_trait::async_trait;
use creditpay_checkout::CreateCreditCheckoutRequest;
use creditpay_common::{
    CheckoutProvider, CheckoutSession, CheckoutSessionParams, CreditPackage, CreditStore,
    CreditpayError, PaymentMethod, PaymentTransaction, RecordId,
};
use mockall::mock;

mock! {
    pub Provider {}

    #[async_trait]
    impl CheckoutProvider for Provider {
        async fn create_checkout_session(
            &self,
            params: &CheckoutSessionParams,
        ) -> Result<CheckoutSession, CreditpayError>;
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl CreditStore for Store {
        async fn find_credit_package(
            &self,
            package_id: &RecordId,
        ) -> Result<Option<CreditPackage>, CreditpayError>;

        async fn find_payment_method(
            &self,
            code: &str,
        ) -> Result<Option<PaymentMethod>, CreditpayError>;

        async fn insert_payment_transaction(
            &self,
            transaction: &PaymentTransaction,
        ) -> Result<(), CreditpayError>;
    }
}

pub const SESSION_ID: &str = "cs_test_a1";
pub const SESSION_URL: &str = "https://checkout.stripe.com/c/pay/cs_test_a1";

pub fn starter_package() -> CreditPackage {
    CreditPackage {
        id: RecordId::Number(7),
        name: "Starter".to_string(),
        credits: 100,
        price: 9.99,
    }
}

pub fn stripe_method() -> PaymentMethod {
    PaymentMethod {
        id: RecordId::Number(3),
        code: "stripe".to_string(),
    }
}

pub fn starter_request() -> CreateCreditCheckoutRequest {
    CreateCreditCheckoutRequest {
        user_id: RecordId::Number(42),
        package_id: RecordId::Number(7),
        success_url: "https://a/ok".to_string(),
        cancel_url: "https://a/no".to_string(),
    }
}

pub fn created_session() -> CheckoutSession {
    CheckoutSession {
        id: SESSION_ID.to_string(),
        url: SESSION_URL.to_string(),
    }
}

/// Provider that succeeds exactly once with [`created_session`].
pub fn provider_creating_session() -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_create_checkout_session()
        .times(1)
        .returning(|_| Ok(created_session()));
    provider
}

/// Store that knows the starter package and the stripe payment method and
/// accepts one transaction insert.
pub fn store_with_starter_package() -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_find_credit_package()
        .returning(|_| Ok(Some(starter_package())));
    store
        .expect_find_payment_method()
        .returning(|_| Ok(Some(stripe_method())));
    store
        .expect_insert_payment_transaction()
        .times(1)
        .returning(|_| Ok(()));
    store
}
