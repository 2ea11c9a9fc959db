//! Summary Routes
//!
//! Totals and balances, recomputed from the full expense list per request.

use axum::{extract::State, routing::get, Json, Router};

use super::{error_response, ApiError};
use crate::models::{ParticipantBalanceResponse, ParticipantTotalResponse, SummaryResponse};
use crate::AppState;

/// Totals, balances and grand total
#[utoipa::path(
    get,
    path = "/warikan/summary",
    responses(
        (status = 200, description = "Summary of all expenses", body = SummaryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Summary"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state
        .summary_service
        .summary()
        .await
        .map_err(error_response)?;

    Ok(Json(summary.into()))
}

/// Per-participant owed totals, largest first
#[utoipa::path(
    get,
    path = "/warikan/summary/totals",
    responses(
        (status = 200, description = "Owed totals", body = Vec<ParticipantTotalResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Summary"
)]
pub async fn get_totals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantTotalResponse>>, ApiError> {
    let totals = state
        .summary_service
        .totals()
        .await
        .map_err(error_response)?;

    Ok(Json(totals.into_iter().map(Into::into).collect()))
}

/// Per-participant net balances, highest first
#[utoipa::path(
    get,
    path = "/warikan/summary/balances",
    responses(
        (status = 200, description = "Net balances", body = Vec<ParticipantBalanceResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Summary"
)]
pub async fn get_balances(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantBalanceResponse>>, ApiError> {
    let balances = state
        .summary_service
        .balances()
        .await
        .map_err(error_response)?;

    Ok(Json(balances.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/warikan/summary", get(get_summary))
        .route("/warikan/summary/totals", get(get_totals))
        .route("/warikan/summary/balances", get(get_balances))
}
