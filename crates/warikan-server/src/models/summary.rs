//! Summary - per-participant totals and balances

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use warikan::{ParticipantBalance, ParticipantTotal, Summary};

/// Total owed by one participant
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantTotalResponse {
    pub participant_id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "50.00")]
    pub total: Decimal,
}

/// Paid / owes / net for one participant
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantBalanceResponse {
    pub participant_id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "90.00")]
    pub paid: Decimal,
    #[schema(value_type = String, example = "50.00")]
    pub owes: Decimal,
    /// Positive: the group owes them. Negative: they owe the group.
    #[schema(value_type = String, example = "40.00")]
    pub net: Decimal,
}

/// Summary response
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub totals: Vec<ParticipantTotalResponse>,
    pub balances: Vec<ParticipantBalanceResponse>,
    #[schema(value_type = String, example = "150.00")]
    pub grand_total: Decimal,
    pub expense_count: usize,
}

impl From<ParticipantTotal> for ParticipantTotalResponse {
    fn from(total: ParticipantTotal) -> Self {
        Self {
            participant_id: total.participant_id,
            name: total.name,
            total: total.total,
        }
    }
}

impl From<ParticipantBalance> for ParticipantBalanceResponse {
    fn from(balance: ParticipantBalance) -> Self {
        Self {
            participant_id: balance.participant_id,
            name: balance.name,
            paid: balance.paid,
            owes: balance.owes,
            net: balance.net,
        }
    }
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            totals: summary.totals.into_iter().map(Into::into).collect(),
            balances: summary.balances.into_iter().map(Into::into).collect(),
            grand_total: summary.grand_total,
            expense_count: summary.expense_count,
        }
    }
}
