//! Warikan API Routes
//!
//! - /warikan/participants - Participant management
//! - /warikan/expenses - Expense recording (split on create)
//! - /warikan/split/preview - Split calculator without storing
//! - /warikan/summary - Totals and net balances

pub mod expense;
pub mod participant;
pub mod summary;
pub mod swagger;

use axum::http::StatusCode;
use warikan::DomainError;

/// Error reply shared by all handlers
pub type ApiError = (StatusCode, String);

/// Map a domain error to an HTTP status and a user-facing message
pub fn error_response(e: DomainError) -> ApiError {
    match e {
        DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        DomainError::NotFound { entity_type, .. } => {
            (StatusCode::NOT_FOUND, format!("{} not found", entity_type))
        }
        DomainError::Conflict(message) => (StatusCode::CONFLICT, message),
        DomainError::ReferentialConstraint {
            entity_type,
            referenced_by,
            ..
        } => (
            StatusCode::CONFLICT,
            format!(
                "Cannot delete {}: still referenced by {}",
                entity_type.to_lowercase(),
                referenced_by
            ),
        ),
        DomainError::Repository(detail) => {
            tracing::error!("Repository failure: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again.".to_string(),
            )
        }
    }
}
