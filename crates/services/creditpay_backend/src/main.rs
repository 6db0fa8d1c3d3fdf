// File: services/creditpay_backend/src/main.rs
use creditpay_backend::{app, service_factory::build_checkout_state};
use creditpay_common::logging;
use creditpay_config::load_config;
use std::error::Error;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = load_config()?;
    let checkout_state = build_checkout_state(&config)?;
    let app = app(checkout_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
