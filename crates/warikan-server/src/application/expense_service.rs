//! Expense Application Service (Use Case)
//!
//! Validates new expenses, splits them with the configured policy and
//! stores the expense and its owed shares in one write.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use warikan::domain::{has_cent_precision, MAX_AMOUNT};
use warikan::{
    compute_shares, DomainError, Expense, ExpenseDetail, ExpenseRepository, OwedShare, SplitPolicy,
};

/// Application service for Expense operations
pub struct ExpenseService<R: ExpenseRepository> {
    repo: Arc<R>,
    policy: SplitPolicy,
}

impl<R: ExpenseRepository> ExpenseService<R> {
    pub fn new(repo: Arc<R>, policy: SplitPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// Get all Expenses, newest first
    pub async fn list(&self) -> Result<Vec<ExpenseDetail>, DomainError> {
        self.repo.find_all_detailed().await
    }

    /// Get an Expense by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ExpenseDetail>, DomainError> {
        self.repo.find_by_id_detailed(id).await
    }

    /// Compute the shares a new expense would get, without storing anything
    pub fn preview_split(
        &self,
        total_amount: Decimal,
        participant_ids: &[Uuid],
    ) -> Result<BTreeMap<Uuid, Decimal>, DomainError> {
        validate_amount(total_amount)?;
        compute_shares(total_amount, participant_ids, self.policy)
    }

    /// Record a new Expense split evenly between `participant_ids`
    pub async fn create(
        &self,
        description: String,
        total_amount: Decimal,
        paid_by: Uuid,
        participant_ids: Vec<Uuid>,
        expense_date: Option<NaiveDate>,
    ) -> Result<ExpenseDetail, DomainError> {
        let description = description.trim();
        if description.is_empty() {
            tracing::warn!("Rejected expense with empty description");
            return Err(DomainError::validation(
                "Please describe what the expense is for",
            ));
        }
        validate_amount(total_amount)?;

        let shares = compute_shares(total_amount, &participant_ids, self.policy)?;

        let expense = Expense::new(description.to_string(), total_amount, paid_by, expense_date);
        let owed: Vec<OwedShare> = shares
            .into_iter()
            .map(|(participant_id, amount)| OwedShare::new(expense.id, participant_id, amount))
            .collect();

        let saved = self.repo.create(&expense, &owed).await?;

        tracing::info!(
            "Created Expense: {} ({}) - {} split {} ways ({})",
            saved.expense.description,
            saved.expense.id,
            saved.expense.total_amount,
            saved.shares.len(),
            self.policy
        );

        Ok(saved)
    }

    /// Delete an Expense and its owed shares
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Expense: {}", id);
        }
        Ok(deleted)
    }
}

fn validate_amount(total_amount: Decimal) -> Result<(), DomainError> {
    if total_amount <= Decimal::ZERO {
        tracing::warn!("Rejected non-positive amount: {}", total_amount);
        return Err(DomainError::validation("Please enter a valid amount"));
    }
    if total_amount > MAX_AMOUNT {
        tracing::warn!("Rejected amount above {}: {}", MAX_AMOUNT, total_amount);
        return Err(DomainError::validation(format!(
            "Amount cannot exceed {}",
            MAX_AMOUNT
        )));
    }
    if !has_cent_precision(total_amount) {
        tracing::warn!("Rejected amount with sub-cent precision: {}", total_amount);
        return Err(DomainError::validation(
            "Amount can have at most two decimal places",
        ));
    }
    Ok(())
}
