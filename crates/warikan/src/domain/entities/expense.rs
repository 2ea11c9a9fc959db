//! Expense - a recorded transaction split between participants
//!
//! Pure domain entity without infrastructure dependencies.
//! Expenses are immutable once created; they can only be deleted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expense paid by one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub total_amount: Decimal,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub paid_by: Uuid,
}

/// Portion of an expense owed by one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwedShare {
    pub expense_id: Uuid,
    pub participant_id: Uuid,
    pub amount_owed: Decimal,
}

/// Owed share joined with the debtor's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareDetail {
    pub participant_id: Uuid,
    pub name: String,
    pub amount_owed: Decimal,
}

/// Expense joined with its payer's name and its owed shares
///
/// This is the shape the aggregator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetail {
    pub expense: Expense,
    pub payer_name: String,
    pub shares: Vec<ShareDetail>,
}

impl Expense {
    /// Create a new Expense with generated ID and timestamp
    pub fn new(
        description: String,
        total_amount: Decimal,
        paid_by: Uuid,
        expense_date: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description,
            total_amount,
            expense_date: expense_date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            paid_by,
        }
    }
}

impl OwedShare {
    pub fn new(expense_id: Uuid, participant_id: Uuid, amount_owed: Decimal) -> Self {
        Self {
            expense_id,
            participant_id,
            amount_owed,
        }
    }
}
