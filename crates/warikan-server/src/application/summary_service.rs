//! Summary Application Service (Use Case)
//!
//! Loads the full expense snapshot and derives totals and balances from it
//! on every request.

use std::sync::Arc;

use warikan::{
    compute_balances, compute_totals, summarize, DomainError, ExpenseRepository,
    ParticipantBalance, ParticipantTotal, Summary,
};

/// Application service for summary views
pub struct SummaryService<R: ExpenseRepository> {
    repo: Arc<R>,
}

impl<R: ExpenseRepository> SummaryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Totals, balances and grand total in one snapshot
    pub async fn summary(&self) -> Result<Summary, DomainError> {
        let expenses = self.repo.find_all_detailed().await?;
        Ok(summarize(&expenses))
    }

    /// Per-participant owed totals, largest first
    pub async fn totals(&self) -> Result<Vec<ParticipantTotal>, DomainError> {
        let expenses = self.repo.find_all_detailed().await?;
        Ok(compute_totals(&expenses))
    }

    /// Per-participant net balances, highest first
    pub async fn balances(&self) -> Result<Vec<ParticipantBalance>, DomainError> {
        let expenses = self.repo.find_all_detailed().await?;
        Ok(compute_balances(&expenses))
    }
}
