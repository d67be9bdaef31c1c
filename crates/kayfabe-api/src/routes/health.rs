//! # Health Probes
//!
//! Unauthenticated liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};

use crate::AppState;

/// Router for `/health`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
