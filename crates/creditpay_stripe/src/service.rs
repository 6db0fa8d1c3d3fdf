use async_trait::async_trait;
use creditpay_common::{
    CheckoutProvider, CheckoutSession, CheckoutSessionParams, CreditpayError, HTTP_CLIENT,
};
use creditpay_config::StripeConfig;
use reqwest::Client;

use crate::logic::create_checkout_session;

/// Stripe implementation of [`CheckoutProvider`].
pub struct StripeCheckoutService {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutService {
    /// Create a service that uses the shared HTTP client.
    pub fn new(config: StripeConfig) -> Self {
        Self::with_client(config, HTTP_CLIENT.clone())
    }

    pub fn with_client(config: StripeConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutService {
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, CreditpayError> {
        create_checkout_session(&self.client, &self.config, params)
            .await
            .map_err(CreditpayError::from)
    }
}
