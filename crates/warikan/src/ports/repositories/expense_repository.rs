//! Expense Repository Port
//!
//! Abstract interface for Expense persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Expense, ExpenseDetail, OwedShare};

/// Repository interface for Expense entities and their owed shares
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Find all Expenses joined with payer and debtor names,
    /// newest `expense_date` first
    async fn find_all_detailed(&self) -> Result<Vec<ExpenseDetail>, DomainError>;

    /// Find one Expense joined with payer and debtor names
    async fn find_by_id_detailed(&self, id: Uuid) -> Result<Option<ExpenseDetail>, DomainError>;

    /// Insert an Expense together with its owed shares in one atomic write
    ///
    /// Fails with `Validation` when the payer or a debtor does not exist.
    async fn create(
        &self,
        expense: &Expense,
        shares: &[OwedShare],
    ) -> Result<ExpenseDetail, DomainError>;

    /// Delete an Expense by ID, cascading to its owed shares
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
