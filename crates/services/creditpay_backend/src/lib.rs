// File: services/creditpay_backend/src/lib.rs
pub mod service_factory;

use axum::{routing::get, Router};
use creditpay_checkout::CheckoutState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

async fn banner() -> &'static str {
    "Welcome to Creditpay API!"
}

/// Builds the full application router: everything lives under `/api`.
pub fn app(checkout_state: Arc<CheckoutState>) -> Router {
    let api_router = Router::new()
        .route("/", get(banner))
        .merge(creditpay_checkout::routes(checkout_state));

    // A nested "/" only matches "/api", so the trailing-slash form is added at the top level
    #[allow(unused_mut)] // only the openapi feature mutates it
    let mut app = Router::new()
        .route("/api/", get(banner))
        .nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use creditpay_checkout::doc::CheckoutApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Creditpay API",
                version = "0.1.0",
                description = "Credit package checkout API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CheckoutApiDoc::openapi());
        tracing::info!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}
