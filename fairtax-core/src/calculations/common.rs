//! Shared decimal helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (values at exactly 0.005 round away from zero).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps `value` into `[lo, hi]`.
pub fn clamp(
    value: Decimal,
    lo: Decimal,
    hi: Decimal,
) -> Decimal {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_away_from_zero_for_negatives() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(123.45)), dec!(123.45));
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    // =========================================================================
    // clamp tests
    // =========================================================================

    #[test]
    fn clamp_passes_values_inside_the_range() {
        assert_eq!(clamp(dec!(0.25), dec!(0), dec!(0.5)), dec!(0.25));
    }

    #[test]
    fn clamp_raises_values_below_the_floor() {
        assert_eq!(clamp(dec!(-0.1), dec!(0), dec!(0.5)), dec!(0));
    }

    #[test]
    fn clamp_lowers_values_above_the_ceiling() {
        assert_eq!(clamp(dec!(0.9), dec!(0), dec!(0.5)), dec!(0.5));
    }

    #[test]
    fn clamp_keeps_the_boundaries_themselves() {
        assert_eq!(clamp(dec!(0), dec!(0), dec!(0.5)), dec!(0));
        assert_eq!(clamp(dec!(0.5), dec!(0), dec!(0.5)), dec!(0.5));
    }
}
