use creditpay_common::{
    CreditPackage, CreditStore, CreditpayError, PaymentTransaction, RecordId, TransactionStatus,
};
use creditpay_config::SupabaseConfig;
use creditpay_supabase::{SupabaseClient, SupabaseCreditStore, SupabaseError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_KEY: &str = "service-role-key";

fn supabase_client(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(SupabaseConfig {
        url: server.uri(),
        service_role_key: SERVICE_KEY.to_string(),
    })
}

#[tokio::test]
async fn select_filters_by_equality_and_authenticates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/credit_packages"))
        .and(query_param("id", "eq.7"))
        .and(header("apikey", SERVICE_KEY))
        .and(header("authorization", "Bearer service-role-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "name": "Starter", "credits": 100, "price": 9.99 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rows: Vec<CreditPackage> = supabase_client(&server)
        .select_eq("credit_packages", "id", "7")
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Starter");
    assert_eq!(rows[0].credits, 100);
}

#[tokio::test]
async fn store_returns_none_for_unknown_package() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/credit_packages"))
        .and(query_param("id", "eq.404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = SupabaseCreditStore::new(supabase_client(&server));
    let package = store
        .find_credit_package(&RecordId::Number(404))
        .await
        .unwrap();

    assert!(package.is_none());
}

#[tokio::test]
async fn store_looks_up_payment_method_by_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/payment_methods"))
        .and(query_param("code", "eq.stripe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "code": "stripe", "name": "Stripe" }
        ])))
        .mount(&server)
        .await;

    let store = SupabaseCreditStore::new(supabase_client(&server));
    let method = store.find_payment_method("stripe").await.unwrap().unwrap();

    assert_eq!(method.id, RecordId::Number(3));
    assert_eq!(method.code, "stripe");
}

#[tokio::test]
async fn store_inserts_transaction_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/payment_transactions"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "user_id": 42,
            "payment_method_id": 3,
            "credit_package_id": 7,
            "amount": 9.99,
            "currency": "PLN",
            "status": "pending",
            "external_transaction_id": "cs_test_a1",
            "payment_data": { "session_id": "cs_test_a1" }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let store = SupabaseCreditStore::new(supabase_client(&server));
    let transaction = PaymentTransaction {
        user_id: 42.into(),
        payment_method_id: 3.into(),
        credit_package_id: 7.into(),
        amount: 9.99,
        currency: "PLN".to_string(),
        status: TransactionStatus::Pending,
        external_transaction_id: "cs_test_a1".to_string(),
        payment_data: json!({ "session_id": "cs_test_a1" }),
    };

    store.insert_payment_transaction(&transaction).await.unwrap();
}

#[tokio::test]
async fn postgrest_error_message_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/payment_transactions"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint",
            "details": null,
            "hint": null
        })))
        .mount(&server)
        .await;

    let err = supabase_client(&server)
        .insert("payment_transactions", &json!({ "user_id": 1 }))
        .await
        .unwrap_err();

    match err {
        SupabaseError::ApiError { status_code, message } => {
            assert_eq!(status_code, 409);
            assert_eq!(message, "duplicate key value violates unique constraint");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn rejected_package_lookup_is_a_database_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/credit_packages"))
        .and(query_param("id", "eq.starter"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "22P02",
            "message": "invalid input syntax for type bigint: \"starter\"",
            "details": null,
            "hint": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = SupabaseCreditStore::new(supabase_client(&server));
    let err = store
        .find_credit_package(&RecordId::Text("starter".to_string()))
        .await
        .unwrap_err();

    match err {
        CreditpayError::DatabaseError(message) => {
            assert!(message.contains("Status: 400"));
            assert!(message.contains("invalid input syntax for type bigint"));
        }
        other => panic!("expected DatabaseError, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/payment_methods"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = supabase_client(&server)
        .select_eq::<serde_json::Value>("payment_methods", "code", "stripe")
        .await
        .unwrap_err();

    match err {
        SupabaseError::ApiError { status_code, message } => {
            assert_eq!(status_code, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn unresolved_url_is_a_config_error() {
    let store = SupabaseCreditStore::new(SupabaseClient::new(SupabaseConfig {
        url: "secret_from_env".to_string(),
        service_role_key: SERVICE_KEY.to_string(),
    }));

    let err = store.find_payment_method("stripe").await.unwrap_err();
    assert!(matches!(err, CreditpayError::ConfigError(_)));
}
