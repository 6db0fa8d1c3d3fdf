// --- File: crates/creditpay_checkout/src/logic.rs ---
use std::collections::BTreeMap;

use creditpay_common::{
    logging::log_result, CheckoutProvider, CheckoutSession, CheckoutSessionParams, CreditPackage,
    CreditStore, PaymentMethod, PaymentTransaction, RecordId, TransactionStatus,
};
use creditpay_config::CheckoutConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::error::CheckoutError;

// --- Data Structures ---

/// Request from the client app to buy a credit package.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCreditCheckoutRequest {
    #[cfg_attr(feature = "openapi", schema(example = 42))]
    pub user_id: RecordId,
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    pub package_id: RecordId,
    #[cfg_attr(feature = "openapi", schema(example = "https://app.example.com/credits/success"))]
    pub success_url: String,
    #[cfg_attr(feature = "openapi", schema(example = "https://app.example.com/credits/cancel"))]
    pub cancel_url: String,
}

/// Where to send the user to pay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCreditCheckoutResponse {
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://checkout.stripe.com/c/pay/cs_test_a1...")
    )]
    pub url: String,
}

/// Converts a price in the major currency unit to the smallest unit,
/// rounding to the nearest integer (9.99 -> 999).
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Builds the provider parameters for a single one-time line item.
pub fn build_session_params(
    package: &CreditPackage,
    request: &CreateCreditCheckoutRequest,
    settings: &CheckoutConfig,
) -> CheckoutSessionParams {
    let mut metadata = BTreeMap::new();
    metadata.insert("user_id".to_string(), request.user_id.to_string());
    metadata.insert("package_id".to_string(), request.package_id.to_string());
    metadata.insert("credits".to_string(), package.credits.to_string());

    CheckoutSessionParams {
        payment_method_types: settings.payment_method_types.clone(),
        currency: settings.currency.to_lowercase(),
        product_name: package.name.clone(),
        product_description: Some(format!("{} credits", package.credits)),
        unit_amount: to_minor_units(package.price),
        quantity: 1,
        success_url: request.success_url.clone(),
        cancel_url: request.cancel_url.clone(),
        client_reference_id: Some(request.user_id.to_string()),
        metadata,
    }
}

/// Builds the `pending` transaction row linking user, package and session.
pub fn build_pending_transaction(
    request: &CreateCreditCheckoutRequest,
    package: &CreditPackage,
    payment_method: &PaymentMethod,
    session: &CheckoutSession,
    settings: &CheckoutConfig,
) -> PaymentTransaction {
    PaymentTransaction {
        user_id: request.user_id.clone(),
        payment_method_id: payment_method.id.clone(),
        credit_package_id: request.package_id.clone(),
        amount: package.price,
        currency: settings.currency.clone(),
        status: TransactionStatus::Pending,
        external_transaction_id: session.id.clone(),
        payment_data: json!({ "session_id": session.id }),
    }
}

// --- Core Logic Function ---

/// Creates a hosted checkout session for a credit package and records a
/// pending transaction for it.
///
/// The steps run strictly in order: package lookup, session creation,
/// payment method lookup, transaction insert. A failure after the session
/// was created leaves that session open at the provider.
pub async fn create_credit_checkout(
    provider: &dyn CheckoutProvider,
    store: &dyn CreditStore,
    settings: &CheckoutConfig,
    request: CreateCreditCheckoutRequest,
) -> Result<CreateCreditCheckoutResponse, CheckoutError> {
    info!(
        "[Checkout] user {} requested package {}",
        request.user_id, request.package_id
    );

    let package = store
        .find_credit_package(&request.package_id)
        .await
        .map_err(CheckoutError::Store)?
        .ok_or_else(|| {
            warn!("[Checkout] package {} not found", request.package_id);
            CheckoutError::PackageNotFound
        })?;

    let params = build_session_params(&package, &request, settings);
    let session = log_result(
        provider.create_checkout_session(&params).await,
        "[Checkout] checkout session created",
        "[Checkout] checkout session creation failed",
    )
    .map_err(CheckoutError::Provider)?;

    let payment_method = store
        .find_payment_method(&settings.payment_method_code)
        .await
        .map_err(CheckoutError::Store)?
        .ok_or_else(|| {
            warn!(
                "[Checkout] payment method '{}' missing; session {} left open",
                settings.payment_method_code, session.id
            );
            CheckoutError::PaymentMethodNotFound(settings.payment_method_code.clone())
        })?;

    let transaction =
        build_pending_transaction(&request, &package, &payment_method, &session, settings);
    log_result(
        store.insert_payment_transaction(&transaction).await,
        "[Checkout] pending transaction recorded",
        "[Checkout] recording pending transaction failed",
    )
    .map_err(CheckoutError::Store)?;

    info!(
        "[Checkout] session {} ready for user {}",
        session.id, request.user_id
    );
    Ok(CreateCreditCheckoutResponse { url: session.url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> CreditPackage {
        CreditPackage {
            id: 7.into(),
            name: "Starter".to_string(),
            credits: 100,
            price: 9.99,
        }
    }

    fn request() -> CreateCreditCheckoutRequest {
        CreateCreditCheckoutRequest {
            user_id: 42.into(),
            package_id: 7.into(),
            success_url: "https://a/ok".to_string(),
            cancel_url: "https://a/no".to_string(),
        }
    }

    #[test]
    fn minor_units_round_to_nearest() {
        assert_eq!(to_minor_units(9.99), 999);
        assert_eq!(to_minor_units(49.0), 4900);
        assert_eq!(to_minor_units(19.999), 2000);
        assert_eq!(to_minor_units(12.344), 1234);
    }

    #[test]
    fn session_params_follow_the_package() {
        let params = build_session_params(&starter(), &request(), &CheckoutConfig::default());

        assert_eq!(params.unit_amount, 999);
        assert_eq!(params.quantity, 1);
        assert_eq!(params.currency, "pln");
        assert_eq!(params.payment_method_types, vec!["card", "blik", "p24"]);
        assert_eq!(params.product_name, "Starter");
        assert_eq!(params.product_description.as_deref(), Some("100 credits"));
        assert_eq!(params.client_reference_id.as_deref(), Some("42"));
        assert_eq!(params.metadata["user_id"], "42");
        assert_eq!(params.metadata["package_id"], "7");
        assert_eq!(params.metadata["credits"], "100");
        assert_eq!(params.success_url, "https://a/ok");
        assert_eq!(params.cancel_url, "https://a/no");
    }

    #[test]
    fn pending_transaction_uses_fixed_currency() {
        let session = CheckoutSession {
            id: "cs_test_a1".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_test_a1".to_string(),
        };
        let method = PaymentMethod {
            id: 3.into(),
            code: "stripe".to_string(),
        };
        let tx = build_pending_transaction(
            &request(),
            &starter(),
            &method,
            &session,
            &CheckoutConfig::default(),
        );

        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.currency, "PLN");
        assert_eq!(tx.amount, 9.99);
        assert_eq!(tx.user_id, RecordId::Number(42));
        assert_eq!(tx.credit_package_id, RecordId::Number(7));
        assert_eq!(tx.payment_method_id, RecordId::Number(3));
        assert_eq!(tx.external_transaction_id, "cs_test_a1");
        assert_eq!(tx.payment_data, json!({ "session_id": "cs_test_a1" }));
    }
}
