//! Shared helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half-up (away from zero
/// at the midpoint), following financial rounding convention.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value to zero from below. Used both to normalize negative
/// inputs and to keep derived amounts (taxable income) non-negative.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(1087.454)), dec!(1087.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(1087.455)), dec!(1087.46));
    }

    #[test]
    fn round_half_up_preserves_two_dp_values() {
        assert_eq!(round_half_up(dec!(5737.50)), dec!(5737.50));
    }

    #[test]
    fn floor_at_zero_passes_positive_values() {
        assert_eq!(floor_at_zero(dec!(1200000)), dec!(1200000));
    }

    #[test]
    fn floor_at_zero_clamps_negative_values() {
        assert_eq!(floor_at_zero(dec!(-500)), Decimal::ZERO);
    }

    #[test]
    fn floor_at_zero_keeps_zero() {
        assert_eq!(floor_at_zero(Decimal::ZERO), Decimal::ZERO);
    }
}
