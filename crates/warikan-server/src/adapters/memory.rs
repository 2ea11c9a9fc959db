//! In-memory implementation of the repository ports
//!
//! Mirrors the referential rules of the PostgreSQL schema so application
//! services can be tested without a database.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use uuid::Uuid;

use warikan::{
    DomainError, Expense, ExpenseDetail, ExpenseRepository, OwedShare, Participant,
    ParticipantRepository, ShareDetail,
};

#[derive(Default)]
struct Tables {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    shares: Vec<OwedShare>,
}

/// Shared in-memory store implementing both repository ports
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail like an unreachable backend
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn expense_count(&self) -> usize {
        self.tables.lock().unwrap().expenses.len()
    }

    pub fn share_count(&self) -> usize {
        self.tables.lock().unwrap().shares.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::Repository("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn detail(tables: &Tables, expense: &Expense) -> ExpenseDetail {
        let name_of = |id: Uuid| {
            tables
                .participants
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_default()
        };

        let mut shares: Vec<ShareDetail> = tables
            .shares
            .iter()
            .filter(|s| s.expense_id == expense.id)
            .map(|s| ShareDetail {
                participant_id: s.participant_id,
                name: name_of(s.participant_id),
                amount_owed: s.amount_owed,
            })
            .collect();
        shares.sort_by(|a, b| a.name.cmp(&b.name));

        ExpenseDetail {
            expense: expense.clone(),
            payer_name: name_of(expense.paid_by),
            shares,
        }
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Participant>, DomainError> {
        self.check_available()?;
        let mut participants = self.tables.lock().unwrap().participants.clone();
        participants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(participants)
    }

    async fn create(&self, participant: &Participant) -> Result<Participant, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.participants.iter().any(|p| p.name == participant.name) {
            return Err(DomainError::Conflict(format!(
                "A participant named '{}' already exists",
                participant.name
            )));
        }
        tables.participants.push(participant.clone());
        Ok(participant.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let referenced = tables.expenses.iter().any(|e| e.paid_by == id)
            || tables.shares.iter().any(|s| s.participant_id == id);
        if referenced {
            return Err(DomainError::referenced("Participant", id, "existing expenses"));
        }
        let before = tables.participants.len();
        tables.participants.retain(|p| p.id != id);
        Ok(tables.participants.len() < before)
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryStore {
    async fn find_all_detailed(&self) -> Result<Vec<ExpenseDetail>, DomainError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        let mut expenses = tables.expenses.clone();
        expenses.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(expenses.iter().map(|e| Self::detail(&tables, e)).collect())
    }

    async fn find_by_id_detailed(&self, id: Uuid) -> Result<Option<ExpenseDetail>, DomainError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .expenses
            .iter()
            .find(|e| e.id == id)
            .map(|e| Self::detail(&tables, e)))
    }

    async fn create(
        &self,
        expense: &Expense,
        shares: &[OwedShare],
    ) -> Result<ExpenseDetail, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let exists = |id: Uuid| tables.participants.iter().any(|p| p.id == id);
        if !exists(expense.paid_by) || shares.iter().any(|s| !exists(s.participant_id)) {
            return Err(DomainError::validation(
                "Payer and participants must be existing participants",
            ));
        }
        tables.expenses.push(expense.clone());
        tables.shares.extend_from_slice(shares);
        Ok(Self::detail(&tables, expense))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.expenses.len();
        tables.expenses.retain(|e| e.id != id);
        if tables.expenses.len() == before {
            return Ok(false);
        }
        tables.shares.retain(|s| s.expense_id != id);
        Ok(true)
    }
}
