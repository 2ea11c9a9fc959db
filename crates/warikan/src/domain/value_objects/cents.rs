//! Cent rounding helpers for currency amounts

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits every stored amount carries
pub const CURRENCY_SCALE: u32 = 2;

/// Largest amount a `NUMERIC(12,2)` column holds: 9,999,999,999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, CURRENCY_SCALE);

/// Round to cents (half away from zero) with exactly two fractional digits
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Truncate toward zero to cents with exactly two fractional digits
pub fn floor_cents(amount: Decimal) -> Decimal {
    let mut floored = amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::ToZero);
    floored.rescale(CURRENCY_SCALE);
    floored
}

/// True when the amount needs no more than two fractional digits
pub fn has_cent_precision(amount: Decimal) -> bool {
    amount.normalize().scale() <= CURRENCY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_cents_rounds_half_away_from_zero() {
        assert_eq!(to_cents(dec!(0.125)), dec!(0.13));
        assert_eq!(to_cents(dec!(-0.125)), dec!(-0.13));
        assert_eq!(to_cents(dec!(33.3333)), dec!(33.33));
    }

    #[test]
    fn test_to_cents_pads_scale() {
        let cents = to_cents(dec!(25));
        assert_eq!(cents.scale(), 2);
        assert_eq!(cents.to_string(), "25.00");
    }

    #[test]
    fn test_floor_cents() {
        assert_eq!(floor_cents(dec!(16.6666)), dec!(16.66));
        assert_eq!(floor_cents(dec!(0.019)), dec!(0.01));
    }

    #[test]
    fn test_max_amount_matches_column_limit() {
        assert_eq!(MAX_AMOUNT, dec!(9999999999.99));
        assert_eq!(MAX_AMOUNT.scale(), 2);
    }

    #[test]
    fn test_cent_precision() {
        assert!(has_cent_precision(dec!(10.50)));
        assert!(has_cent_precision(dec!(10.500)));
        assert!(!has_cent_precision(dec!(10.505)));
    }
}
