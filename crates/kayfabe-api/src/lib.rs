//! # kayfabe-api — Axum API Adapter
//!
//! The HTTP surface of the Kayfabe roster engine, built on
//! Axum/Tower/Tokio. Every route is a thin translation between HTTP
//! and the engine's transition-request shape — no business logic lives
//! here.
//!
//! ## Routes
//!
//! - `POST /v1/roster/{kind}/{id}/transitions` — apply a transition
//! - `GET  /v1/roster/{kind}/{id}/status` — derived status
//! - `GET  /v1/tag-teams/{id}/bookability` — derived bookability
//! - `GET  /v1/stables/{id}/composition` — derived composition
//! - `GET  /health` — liveness probe (unauthenticated)
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No business logic in route handlers — delegates to the booking
//!   engine.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::roster::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use kayfabe_booking::InMemoryRoster;
    use kayfabe_state::Wrestler;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(AppState::new())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_employ_then_status() {
        let mut roster = InMemoryRoster::new();
        let id = roster.add_wrestler(Wrestler::new("Rico Carter"));
        let state = AppState::with_roster(roster);

        let response = app(state.clone())
            .oneshot(
                Request::post(format!("/v1/roster/wrestlers/{}/transitions", id.as_uuid()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"transition":"employ"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["events"][0]["name"], "WrestlerEmployed");

        let response = app(state)
            .oneshot(
                Request::get(format!("/v1/roster/wrestlers/{}/status", id.as_uuid()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "EMPLOYED");
    }

    #[tokio::test]
    async fn test_refused_transition_is_unprocessable() {
        let mut roster = InMemoryRoster::new();
        let id = roster.add_wrestler(Wrestler::new("Rico Carter"));
        let state = AppState::with_roster(roster);

        let response = app(state)
            .oneshot(
                Request::post(format!("/v1/roster/wrestlers/{}/transitions", id.as_uuid()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"transition":"suspend"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            "cannot suspend Rico Carter: is unemployed"
        );
    }

    #[tokio::test]
    async fn test_unknown_entity_is_not_found() {
        let response = app(AppState::new())
            .oneshot(
                Request::get(format!(
                    "/v1/roster/wrestlers/{}/status",
                    uuid::Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
