//! # Roster Routes
//!
//! Routes:
//! - `POST /v1/roster/{kind}/{id}/transitions` — apply a transition
//! - `GET  /v1/roster/{kind}/{id}/status` — derived status
//! - `GET  /v1/tag-teams/{id}/bookability` — derived bookability
//! - `GET  /v1/stables/{id}/composition` — derived weighted composition
//!
//! `{kind}` is the plural collection name (`wrestlers`, `managers`,
//! `referees`, `tag-teams`, `stables`, `titles`).

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kayfabe_booking::{
    stable_composition, tag_team_bookability, StableComposition, TransitionEvent, TransitionKind,
    TransitionRequest,
};
use kayfabe_core::{
    EntityRef, EntityType, ManagerId, RefereeId, StableId, TagTeamId, Timestamp, TitleId,
    WrestlerId,
};
use kayfabe_state::{roster_status, title_status};

use crate::error::AppError;
use crate::AppState;

/// Router for the roster surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/roster/{kind}/{id}/transitions", post(apply_transition))
        .route("/v1/roster/{kind}/{id}/status", get(read_status))
        .route("/v1/tag-teams/{id}/bookability", get(read_bookability))
        .route("/v1/stables/{id}/composition", get(read_composition))
}

/// Request body for a transition.
#[derive(Debug, Deserialize)]
struct TransitionBody {
    /// The transition to apply (`employ`, `release`, `clear_injury`, ...).
    transition: TransitionKind,
    /// Optional RFC 3339 effective date; defaults to now.
    effective_at: Option<String>,
}

/// One published domain event.
#[derive(Debug, Serialize)]
struct EventBody {
    name: String,
    entity: String,
    effective_at: String,
}

impl From<&TransitionEvent> for EventBody {
    fn from(event: &TransitionEvent) -> Self {
        Self {
            name: event.name(),
            entity: event.entity_name.clone(),
            effective_at: event.effective_at.to_iso8601(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TransitionResponse {
    events: Vec<EventBody>,
}

async fn apply_transition(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(body): Json<TransitionBody>,
) -> Result<Json<TransitionResponse>, AppError> {
    let target = parse_target(&kind, id)?;
    let effective_at = body
        .effective_at
        .as_deref()
        .map(Timestamp::parse_lenient)
        .transpose()
        .map_err(|err| AppError::Validation(err.to_string()))?;
    let request = TransitionRequest {
        target,
        kind: body.transition,
        effective_at,
    };

    let mut roster = state.roster()?;
    let events = state.booker().handle(&mut *roster, &request)?;
    tracing::info!(target: "kayfabe_api", entity = %target, transition = %request.kind, "transition applied");
    Ok(Json(TransitionResponse {
        events: events.iter().map(EventBody::from).collect(),
    }))
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: String,
}

async fn read_status(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<StatusResponse>, AppError> {
    let target = parse_target(&kind, id)?;
    let roster = state.roster()?;
    let view = kayfabe_booking::RosterRepository::view(&*roster, &target)?;
    let now = Timestamp::now();
    let status = match target.entity_type() {
        EntityType::Title => title_status(&view.condition, now).to_string(),
        _ => roster_status(&view.condition, now).to_string(),
    };
    Ok(Json(StatusResponse { status }))
}

#[derive(Debug, Serialize)]
struct BookabilityResponse {
    bookability: String,
}

async fn read_bookability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookabilityResponse>, AppError> {
    let roster = state.roster()?;
    let bookability = tag_team_bookability(&roster, TagTeamId(id), Timestamp::now())?;
    Ok(Json(BookabilityResponse {
        bookability: bookability.to_string(),
    }))
}

async fn read_composition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StableComposition>, AppError> {
    let roster = state.roster()?;
    Ok(Json(stable_composition(&roster, StableId(id))?))
}

/// Resolve a collection name and UUID into a typed entity reference.
fn parse_target(kind: &str, id: Uuid) -> Result<EntityRef, AppError> {
    match kind {
        "wrestlers" => Ok(EntityRef::Wrestler(WrestlerId(id))),
        "managers" => Ok(EntityRef::Manager(ManagerId(id))),
        "referees" => Ok(EntityRef::Referee(RefereeId(id))),
        "tag-teams" => Ok(EntityRef::TagTeam(TagTeamId(id))),
        "stables" => Ok(EntityRef::Stable(StableId(id))),
        "titles" => Ok(EntityRef::Title(TitleId(id))),
        other => Err(AppError::Validation(format!(
            "unknown roster collection: {other:?}"
        ))),
    }
}
