//! Split Calculator
//!
//! Divides an expense total evenly between the selected participants.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{floor_cents, to_cents, SplitPolicy, MAX_AMOUNT};

/// Compute each participant's owed share of `total`.
///
/// Participant ids are treated as a set, so duplicates collapse. With
/// [`SplitPolicy::PerShare`] the shares may add up to slightly less or more
/// than `total`; with [`SplitPolicy::DistributeRemainder`] they add up exactly.
pub fn compute_shares(
    total: Decimal,
    participant_ids: &[Uuid],
    policy: SplitPolicy,
) -> Result<BTreeMap<Uuid, Decimal>, DomainError> {
    if total <= Decimal::ZERO {
        return Err(DomainError::validation("Amount must be greater than zero"));
    }
    if total > MAX_AMOUNT {
        return Err(DomainError::validation(format!(
            "Amount cannot exceed {}",
            MAX_AMOUNT
        )));
    }

    let ids: BTreeSet<Uuid> = participant_ids.iter().copied().collect();
    if ids.is_empty() {
        return Err(DomainError::validation(
            "At least one participant must be selected",
        ));
    }

    let count = Decimal::from(ids.len() as u64);
    let raw_share = total / count;

    let shares = match policy {
        SplitPolicy::PerShare => {
            let share = to_cents(raw_share);
            ids.into_iter().map(|id| (id, share)).collect()
        }
        SplitPolicy::DistributeRemainder => {
            let cent = Decimal::new(1, 2);
            let base = floor_cents(raw_share);
            // Always below `count` cents, so each participant gets at most one.
            let mut leftover = to_cents(total) - base * count;

            ids.into_iter()
                .map(|id| {
                    if leftover >= cent {
                        leftover -= cent;
                        (id, base + cent)
                    } else {
                        (id, base)
                    }
                })
                .collect()
        }
    };

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    fn sum(shares: &BTreeMap<Uuid, Decimal>) -> Decimal {
        shares.values().copied().sum()
    }

    #[test]
    fn test_even_split_is_exact() {
        let people = ids(2);
        let shares = compute_shares(dec!(50.00), &people, SplitPolicy::PerShare).unwrap();

        assert_eq!(shares.len(), 2);
        for id in &people {
            assert_eq!(shares[id], dec!(25.00));
            assert_eq!(shares[id].scale(), 2);
        }
    }

    #[test]
    fn test_per_share_does_not_redistribute_remainder() {
        let people = ids(3);
        let shares = compute_shares(dec!(100.00), &people, SplitPolicy::PerShare).unwrap();

        assert!(shares.values().all(|s| *s == dec!(33.33)));
        assert_eq!(sum(&shares), dec!(99.99));
    }

    #[test]
    fn test_per_share_can_overshoot_total() {
        let shares = compute_shares(dec!(0.05), &ids(3), SplitPolicy::PerShare).unwrap();

        assert!(shares.values().all(|s| *s == dec!(0.02)));
        assert_eq!(sum(&shares), dec!(0.06));
    }

    #[test]
    fn test_distribute_remainder_sums_to_total() {
        let people = ids(3);
        let shares =
            compute_shares(dec!(100.00), &people, SplitPolicy::DistributeRemainder).unwrap();

        assert_eq!(sum(&shares), dec!(100.00));

        let mut values: Vec<Decimal> = shares.values().copied().collect();
        values.sort();
        assert_eq!(values, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);

        // Leftover cents go to the smallest ids first.
        let first = shares.keys().next().unwrap();
        assert_eq!(shares[first], dec!(33.34));
    }

    #[test]
    fn test_distribute_remainder_small_total() {
        let shares =
            compute_shares(dec!(0.02), &ids(5), SplitPolicy::DistributeRemainder).unwrap();

        assert_eq!(sum(&shares), dec!(0.02));
        assert_eq!(shares.values().filter(|s| **s == dec!(0.01)).count(), 2);
        assert_eq!(shares.values().filter(|s| s.is_zero()).count(), 3);
    }

    #[test]
    fn test_sum_within_tolerance_for_many_sizes() {
        let totals = [dec!(0.01), dec!(1.00), dec!(10.01), dec!(99.99), dec!(1234.57)];
        for total in totals {
            for n in 1..=12 {
                let people = ids(n);
                let shares = compute_shares(total, &people, SplitPolicy::PerShare).unwrap();

                assert_eq!(shares.len(), n);
                assert!(shares.values().all(|s| *s >= Decimal::ZERO && s.scale() == 2));

                let tolerance = dec!(0.01) * Decimal::from(n as u64);
                assert!((sum(&shares) - total).abs() <= tolerance);

                let exact =
                    compute_shares(total, &people, SplitPolicy::DistributeRemainder).unwrap();
                assert_eq!(sum(&exact), total);
            }
        }
    }

    #[test]
    fn test_order_of_participants_is_irrelevant() {
        let people = ids(4);
        let mut reversed = people.clone();
        reversed.reverse();

        for policy in [SplitPolicy::PerShare, SplitPolicy::DistributeRemainder] {
            let a = compute_shares(dec!(10.00), &people, policy).unwrap();
            let b = compute_shares(dec!(10.00), &reversed, policy).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let id = Uuid::new_v4();
        let shares = compute_shares(dec!(12.00), &[id, id], SplitPolicy::PerShare).unwrap();

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[&id], dec!(12.00));
    }

    #[test]
    fn test_rejects_non_positive_total() {
        for total in [dec!(0), dec!(-5.00)] {
            let result = compute_shares(total, &ids(2), SplitPolicy::PerShare);
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_total_above_column_limit() {
        for total in [MAX_AMOUNT + dec!(0.01), Decimal::MAX] {
            for policy in [SplitPolicy::PerShare, SplitPolicy::DistributeRemainder] {
                let result = compute_shares(total, &ids(2), policy);
                assert!(matches!(result, Err(DomainError::Validation(_))));
            }
        }
    }

    #[test]
    fn test_largest_total_still_splits_to_cents() {
        for policy in [SplitPolicy::PerShare, SplitPolicy::DistributeRemainder] {
            let shares = compute_shares(MAX_AMOUNT, &ids(3), policy).unwrap();
            assert!(shares.values().all(|s| s.scale() == 2));

            let sum = shares
                .values()
                .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(*s));
            assert!(sum.is_some());
        }
    }

    #[test]
    fn test_rejects_empty_selection() {
        let result = compute_shares(dec!(10.00), &[], SplitPolicy::DistributeRemainder);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
