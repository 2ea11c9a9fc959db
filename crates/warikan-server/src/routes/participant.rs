//! Participant Routes
//!
//! HTTP handlers that delegate to ParticipantService.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use super::{error_response, ApiError};
use crate::models::{CreateParticipantRequest, ParticipantResponse};
use crate::AppState;

/// List all participants, ordered by name
#[utoipa::path(
    get,
    path = "/warikan/participants",
    responses(
        (status = 200, description = "List of all participants", body = Vec<ParticipantResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Participant"
)]
pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantResponse>>, ApiError> {
    let participants = state
        .participant_service
        .list()
        .await
        .map_err(error_response)?;

    Ok(Json(participants.into_iter().map(Into::into).collect()))
}

/// Register a new participant
#[utoipa::path(
    post,
    path = "/warikan/participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 200, description = "Participant created", body = ParticipantResponse),
        (status = 400, description = "Empty name"),
        (status = 409, description = "Name already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Participant"
)]
pub async fn create_participant(
    State(state): State<AppState>,
    Json(payload): Json<CreateParticipantRequest>,
) -> Result<Json<ParticipantResponse>, ApiError> {
    let participant = state
        .participant_service
        .create(payload.name)
        .await
        .map_err(error_response)?;

    Ok(Json(participant.into()))
}

/// Remove a participant who is not part of any expense
#[utoipa::path(
    delete,
    path = "/warikan/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant deleted"),
        (status = 404, description = "Participant not found"),
        (status = 409, description = "Participant still referenced by expenses"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Participant"
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state
        .participant_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Participant not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Participant deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/warikan/participants",
            get(list_participants).post(create_participant),
        )
        .route("/warikan/participants/:id", delete(delete_participant))
}
