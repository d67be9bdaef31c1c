//! # Application Error
//!
//! Maps domain errors to structured HTTP responses. Every refusal kind
//! the engine can produce becomes a message the UI can show verbatim —
//! the engine supplies the wording, this layer only picks the status
//! code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use kayfabe_booking::TransitionError;
use kayfabe_state::MembershipError;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (bad dates, malformed ids, period
    /// bounds).
    #[error("validation error: {0}")]
    Validation(String),

    /// A guard refused the transition.
    #[error("{0}")]
    Refused(String),

    /// A membership conflict (double membership, full roster).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match &err {
            TransitionError::NotFound(entity) => AppError::NotFound(entity.to_string()),
            TransitionError::Refused { .. } => AppError::Refused(err.to_string()),
            TransitionError::Period(_) => AppError::Validation(err.to_string()),
            TransitionError::Membership(membership) => match membership {
                MembershipError::Conflict { .. } | MembershipError::RosterFull { .. } => {
                    AppError::Conflict(err.to_string())
                }
                MembershipError::NotEnoughMembers { .. }
                | MembershipError::NotCurrentMember { .. }
                | MembershipError::EndsBeforeStart { .. } => AppError::Validation(err.to_string()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Refused(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
