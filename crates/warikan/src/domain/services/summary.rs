//! Expense Aggregator
//!
//! Per-participant totals and net balances, recomputed in full from an
//! expense snapshot on every call.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::ExpenseDetail;
use crate::domain::value_objects::to_cents;

/// Sum of everything one participant owes across all expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantTotal {
    pub participant_id: Uuid,
    pub name: String,
    pub total: Decimal,
}

/// What one participant paid, owes, and the difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBalance {
    pub participant_id: Uuid,
    pub name: String,
    pub paid: Decimal,
    pub owes: Decimal,
    /// Positive: the group owes this participant. Negative: they owe the group.
    pub net: Decimal,
}

/// Everything the summary view renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub totals: Vec<ParticipantTotal>,
    pub balances: Vec<ParticipantBalance>,
    pub grand_total: Decimal,
    pub expense_count: usize,
}

/// Per-participant sum of owed shares, largest first.
///
/// Participants without any owed share are left out. Ties keep the order in
/// which participants first appear.
pub fn compute_totals(expenses: &[ExpenseDetail]) -> Vec<ParticipantTotal> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut totals: Vec<ParticipantTotal> = Vec::new();

    for share in expenses.iter().flat_map(|e| e.shares.iter()) {
        let slot = *index.entry(share.participant_id).or_insert_with(|| {
            totals.push(ParticipantTotal {
                participant_id: share.participant_id,
                name: share.name.clone(),
                total: Decimal::ZERO,
            });
            totals.len() - 1
        });
        totals[slot].total += share.amount_owed;
    }

    for entry in &mut totals {
        entry.total = to_cents(entry.total);
    }

    // Vec::sort_by is stable, which gives the first-appearance tie break.
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Per-participant paid / owes / net, highest net first.
///
/// The payer's own share counts toward what they owe. Participants who
/// neither paid nor owe anything are left out. Ties keep first-appearance
/// order, visiting each expense's payer before its debtors.
pub fn compute_balances(expenses: &[ExpenseDetail]) -> Vec<ParticipantBalance> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut balances: Vec<ParticipantBalance> = Vec::new();

    let mut slot_for = |id: Uuid, name: &str, balances: &mut Vec<ParticipantBalance>| -> usize {
        *index.entry(id).or_insert_with(|| {
            balances.push(ParticipantBalance {
                participant_id: id,
                name: name.to_string(),
                paid: Decimal::ZERO,
                owes: Decimal::ZERO,
                net: Decimal::ZERO,
            });
            balances.len() - 1
        })
    };

    for detail in expenses {
        let payer = slot_for(detail.expense.paid_by, &detail.payer_name, &mut balances);
        balances[payer].paid += detail.expense.total_amount;

        for share in &detail.shares {
            let debtor = slot_for(share.participant_id, &share.name, &mut balances);
            balances[debtor].owes += share.amount_owed;
        }
    }

    for entry in &mut balances {
        entry.paid = to_cents(entry.paid);
        entry.owes = to_cents(entry.owes);
        entry.net = to_cents(entry.paid - entry.owes);
    }

    balances.sort_by(|a, b| b.net.cmp(&a.net));
    balances
}

/// Sum of all per-participant totals
pub fn grand_total(totals: &[ParticipantTotal]) -> Decimal {
    to_cents(totals.iter().map(|t| t.total).sum())
}

/// Build the full summary for an expense snapshot
pub fn summarize(expenses: &[ExpenseDetail]) -> Summary {
    let totals = compute_totals(expenses);
    let grand_total = grand_total(&totals);

    Summary {
        balances: compute_balances(expenses),
        totals,
        grand_total,
        expense_count: expenses.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Expense, ShareDetail};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    struct People {
        a: Uuid,
        b: Uuid,
        c: Uuid,
    }

    impl People {
        fn new() -> Self {
            Self {
                a: Uuid::new_v4(),
                b: Uuid::new_v4(),
                c: Uuid::new_v4(),
            }
        }

        fn name(&self, id: Uuid) -> &'static str {
            if id == self.a {
                "A"
            } else if id == self.b {
                "B"
            } else {
                "C"
            }
        }
    }

    fn mock_expense(
        people: &People,
        total: Decimal,
        payer: Uuid,
        shares: &[(Uuid, Decimal)],
    ) -> ExpenseDetail {
        let expense_id = Uuid::new_v4();
        ExpenseDetail {
            expense: Expense {
                id: expense_id,
                description: "Dinner".to_string(),
                total_amount: total,
                expense_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                created_at: Utc::now(),
                paid_by: payer,
            },
            payer_name: people.name(payer).to_string(),
            shares: shares
                .iter()
                .map(|(id, amount)| ShareDetail {
                    participant_id: *id,
                    name: people.name(*id).to_string(),
                    amount_owed: *amount,
                })
                .collect(),
        }
    }

    fn two_dinners(p: &People) -> Vec<ExpenseDetail> {
        vec![
            mock_expense(
                p,
                dec!(90),
                p.a,
                &[(p.a, dec!(30)), (p.b, dec!(30)), (p.c, dec!(30))],
            ),
            mock_expense(
                p,
                dec!(60),
                p.b,
                &[(p.a, dec!(20)), (p.b, dec!(20)), (p.c, dec!(20))],
            ),
        ]
    }

    #[test]
    fn test_balances_example() {
        let p = People::new();
        let balances = compute_balances(&two_dinners(&p));

        let order: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);

        assert_eq!(balances[0].paid, dec!(90));
        assert_eq!(balances[0].owes, dec!(50));
        assert_eq!(balances[0].net, dec!(40));

        assert_eq!(balances[1].paid, dec!(60));
        assert_eq!(balances[1].owes, dec!(50));
        assert_eq!(balances[1].net, dec!(10));

        assert_eq!(balances[2].paid, Decimal::ZERO);
        assert_eq!(balances[2].owes, dec!(50));
        assert_eq!(balances[2].net, dec!(-50));
    }

    #[test]
    fn test_balances_empty() {
        assert!(compute_balances(&[]).is_empty());
        assert!(compute_totals(&[]).is_empty());
    }

    #[test]
    fn test_balances_net_sums_to_zero_when_shares_cover_totals() {
        let p = People::new();
        let balances = compute_balances(&two_dinners(&p));
        let net: Decimal = balances.iter().map(|b| b.net).sum();
        assert_eq!(net, Decimal::ZERO);
    }

    #[test]
    fn test_balances_ties_keep_first_appearance() {
        let p = People::new();
        // C pays for B; A appears only later with a zero net.
        let expenses = vec![
            mock_expense(&p, dec!(10), p.c, &[(p.b, dec!(10))]),
            mock_expense(&p, dec!(5), p.a, &[(p.a, dec!(5))]),
            mock_expense(&p, dec!(4), p.b, &[(p.c, dec!(4))]),
        ];
        let balances = compute_balances(&expenses);

        let order: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();
        // C: +6, A: 0, B: -6
        assert_eq!(order, vec!["C", "A", "B"]);

        let tied = vec![
            mock_expense(&p, dec!(10), p.b, &[(p.b, dec!(10))]),
            mock_expense(&p, dec!(10), p.a, &[(p.a, dec!(10))]),
        ];
        let order: Vec<String> = compute_balances(&tied).into_iter().map(|b| b.name).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_payer_without_shares_still_listed() {
        let p = People::new();
        let expenses = vec![mock_expense(&p, dec!(20), p.a, &[(p.b, dec!(20))])];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].participant_id, p.a);
        assert_eq!(balances[0].owes, Decimal::ZERO);
        assert_eq!(balances[0].net, dec!(20));
    }

    #[test]
    fn test_totals_sorted_descending_and_absent_when_no_shares() {
        let p = People::new();
        let expenses = vec![
            mock_expense(&p, dec!(30), p.c, &[(p.a, dec!(10)), (p.b, dec!(20))]),
            mock_expense(&p, dec!(5), p.c, &[(p.a, dec!(5))]),
        ];
        let totals = compute_totals(&expenses);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, "B");
        assert_eq!(totals[0].total, dec!(20));
        assert_eq!(totals[1].name, "A");
        assert_eq!(totals[1].total, dec!(15));
        assert!(totals.iter().all(|t| t.participant_id != p.c));
    }

    #[test]
    fn test_totals_sum_matches_all_shares() {
        let p = People::new();
        let expenses = vec![
            mock_expense(
                &p,
                dec!(100.00),
                p.a,
                &[(p.a, dec!(33.33)), (p.b, dec!(33.33)), (p.c, dec!(33.33))],
            ),
            mock_expense(&p, dec!(12.50), p.b, &[(p.a, dec!(6.25)), (p.c, dec!(6.25))]),
        ];
        let totals = compute_totals(&expenses);

        let all_shares: Decimal = expenses
            .iter()
            .flat_map(|e| e.shares.iter())
            .map(|s| s.amount_owed)
            .sum();
        let summed: Decimal = totals.iter().map(|t| t.total).sum();

        assert_eq!(summed, all_shares);
        assert_eq!(grand_total(&totals), dec!(112.49));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let p = People::new();
        let expenses = two_dinners(&p);

        assert_eq!(compute_totals(&expenses), compute_totals(&expenses));
        assert_eq!(compute_balances(&expenses), compute_balances(&expenses));
        assert_eq!(summarize(&expenses), summarize(&expenses));
    }

    #[test]
    fn test_summarize() {
        let p = People::new();
        let summary = summarize(&two_dinners(&p));

        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.grand_total, dec!(150));
        assert_eq!(summary.totals.len(), 3);
        assert_eq!(summary.balances.len(), 3);
    }
}
