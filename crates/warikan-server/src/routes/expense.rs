//! Expense Routes
//!
//! HTTP handlers that delegate to ExpenseService for validation,
//! splitting and storage.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use uuid::Uuid;
use warikan::DomainError;

use super::{error_response, ApiError};
use crate::models::{
    CreateExpenseRequest, ExpenseResponse, ShareAmount, SplitPreviewRequest, SplitPreviewResponse,
};
use crate::AppState;

/// List all expenses, newest date first
#[utoipa::path(
    get,
    path = "/warikan/expenses",
    responses(
        (status = 200, description = "List of expenses with owed shares", body = Vec<ExpenseResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Expense"
)]
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = state.expense_service.list().await.map_err(error_response)?;

    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// Record a new expense, split evenly between the selected participants
#[utoipa::path(
    post,
    path = "/warikan/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Expense created", body = ExpenseResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Expense"
)]
pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let detail = state
        .expense_service
        .create(
            payload.description,
            payload.total_amount,
            payload.paid_by,
            payload.participant_ids,
            payload.expense_date,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(detail.into()))
}

/// Get expense by ID
#[utoipa::path(
    get,
    path = "/warikan/expenses/{id}",
    params(
        ("id" = Uuid, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense found", body = ExpenseResponse),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Expense"
)]
pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let detail = state
        .expense_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Expense not found".to_string()))?;

    Ok(Json(detail.into()))
}

/// Delete an expense and its owed shares
#[utoipa::path(
    delete,
    path = "/warikan/expenses/{id}",
    params(
        ("id" = Uuid, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Expense deleted"),
        (status = 404, description = "Expense not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Expense"
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state
        .expense_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Expense not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Expense deleted"
    })))
}

/// Preview how a total would be split, without recording anything
#[utoipa::path(
    post,
    path = "/warikan/split/preview",
    request_body = SplitPreviewRequest,
    responses(
        (status = 200, description = "Computed shares", body = SplitPreviewResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "Expense"
)]
pub async fn preview_split(
    State(state): State<AppState>,
    Json(payload): Json<SplitPreviewRequest>,
) -> Result<Json<SplitPreviewResponse>, ApiError> {
    let shares = state
        .expense_service
        .preview_split(payload.total_amount, &payload.participant_ids)
        .map_err(error_response)?;

    let assigned = shares
        .values()
        .try_fold(Decimal::ZERO, |acc, share| acc.checked_add(*share))
        .ok_or_else(|| {
            error_response(DomainError::validation("Amount is too large to split"))
        })?;

    Ok(Json(SplitPreviewResponse {
        policy: state.expense_service.policy().to_string(),
        shares: shares
            .into_iter()
            .map(|(participant_id, amount)| ShareAmount {
                participant_id,
                amount,
            })
            .collect(),
        unassigned: payload.total_amount - assigned,
        assigned,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/warikan/expenses", get(list_expenses).post(create_expense))
        .route(
            "/warikan/expenses/:id",
            get(get_expense).delete(delete_expense),
        )
        .route("/warikan/split/preview", post(preview_split))
}
