//! PostgreSQL Repository Implementations

mod expense_repository;
mod participant_repository;

pub use expense_repository::PgExpenseRepository;
pub use participant_repository::PgParticipantRepository;

use warikan::DomainError;

/// Log and wrap an unexpected database error
fn repository_error(e: sqlx::Error) -> DomainError {
    tracing::error!("Database error: {}", e);
    DomainError::Repository(e.to_string())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_check_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_check_violation())
}
