//! Expense - transaction split between participants

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use warikan::{ExpenseDetail, ShareDetail};

// ============================================
// Request/Response DTOs
// ============================================

/// Create Expense request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExpenseRequest {
    pub description: String,
    /// Decimal string, at most two fractional digits
    #[schema(value_type = String, example = "100.00")]
    pub total_amount: Decimal,
    /// Participant who paid
    pub paid_by: Uuid,
    /// Participants the total is split between (may include the payer)
    pub participant_ids: Vec<Uuid>,
    /// Defaults to today
    pub expense_date: Option<NaiveDate>,
}

/// One participant's share of an expense
#[derive(Debug, Serialize, ToSchema)]
pub struct ExpenseShareResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "33.33")]
    pub amount_owed: Decimal,
}

/// Expense response with payer name and owed shares
#[derive(Debug, Serialize, ToSchema)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub description: String,
    #[schema(value_type = String, example = "100.00")]
    pub total_amount: Decimal,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub paid_by: Uuid,
    pub payer_name: String,
    pub participants: Vec<ExpenseShareResponse>,
}

impl From<ShareDetail> for ExpenseShareResponse {
    fn from(share: ShareDetail) -> Self {
        Self {
            id: share.participant_id,
            name: share.name,
            amount_owed: share.amount_owed,
        }
    }
}

impl From<ExpenseDetail> for ExpenseResponse {
    fn from(detail: ExpenseDetail) -> Self {
        Self {
            id: detail.expense.id,
            description: detail.expense.description,
            total_amount: detail.expense.total_amount,
            expense_date: detail.expense.expense_date,
            created_at: detail.expense.created_at,
            paid_by: detail.expense.paid_by,
            payer_name: detail.payer_name,
            participants: detail.shares.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split preview request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SplitPreviewRequest {
    #[schema(value_type = String, example = "100.00")]
    pub total_amount: Decimal,
    pub participant_ids: Vec<Uuid>,
}

/// One computed share in a split preview
#[derive(Debug, Serialize, ToSchema)]
pub struct ShareAmount {
    pub participant_id: Uuid,
    #[schema(value_type = String, example = "33.33")]
    pub amount: Decimal,
}

/// Split preview response
#[derive(Debug, Serialize, ToSchema)]
pub struct SplitPreviewResponse {
    /// Rounding policy in effect (per_share / distribute_remainder)
    pub policy: String,
    pub shares: Vec<ShareAmount>,
    /// Sum of all shares
    #[schema(value_type = String, example = "99.99")]
    pub assigned: Decimal,
    /// total_amount minus assigned; non-zero only under per_share rounding
    #[schema(value_type = String, example = "0.01")]
    pub unassigned: Decimal,
}
