//! # kayfabe-api Entry Point
//!
//! Serves the roster API over an empty in-memory roster. The bind
//! address comes from `KAYFABE_ADDR` (default `0.0.0.0:8080`).

use kayfabe_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr = std::env::var("KAYFABE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "kayfabe-api listening");

    axum::serve(listener, app(AppState::new())).await?;
    Ok(())
}
