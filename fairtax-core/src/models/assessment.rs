use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FairTaxError;
use crate::models::StateCode;

/// Parses user-supplied income text into a [`Decimal`].
///
/// Trims whitespace and strips a leading `$` and comma thousands separators
/// (e.g. `"$1,234.56"`). Empty input is an error here rather than zero:
/// the calculation needs an explicit amount, and zero income is rejected
/// separately by the calculator.
pub fn parse_income(text: &str) -> Result<Decimal, FairTaxError> {
    let normalized = text.trim().trim_start_matches('$').replace(',', "");
    if normalized.is_empty() {
        return Err(FairTaxError::InvalidIncome(text.trim().to_string()));
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %text, "unparsable income: {}", e);
        FairTaxError::InvalidIncome(text.trim().to_string())
    })
}

/// One calculation request: state of residence, household size, gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairTaxInput {
    pub state: StateCode,
    pub family_size: u32,
    pub gross_income: Decimal,
}

impl FairTaxInput {
    pub fn new(state: StateCode, family_size: u32, gross_income: Decimal) -> Self {
        Self {
            state,
            family_size,
            gross_income,
        }
    }

    /// Builds an input from raw text fields, validating each.
    ///
    /// # Errors
    ///
    /// - [`FairTaxError::UnknownState`] if `state_code` is outside the fixed
    ///   set of 50 states
    /// - [`FairTaxError::InvalidFamilySize`] if `family_size` is below one
    /// - [`FairTaxError::InvalidIncome`] if `income_text` does not parse
    pub fn from_raw(
        state_code: &str,
        family_size: u32,
        income_text: &str,
    ) -> Result<Self, FairTaxError> {
        let state = StateCode::parse(state_code)
            .ok_or_else(|| FairTaxError::UnknownState(state_code.trim().to_string()))?;
        if family_size < 1 {
            return Err(FairTaxError::InvalidFamilySize(family_size));
        }
        let gross_income = parse_income(income_text)?;
        Ok(Self::new(state, family_size, gross_income))
    }
}

/// Where disposable income lands relative to the poverty line.
///
/// A presentation distinction only: the rate is already zero whenever income
/// is at or below the line, so `AtLine` and `Below` never carry tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PovertyStanding {
    Above,
    AtLine,
    Below,
}

/// Result of one fair-tax calculation. Built fresh per request, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairTaxAssessment {
    /// Poverty threshold for the input's state and family size.
    pub poverty_line: Decimal,

    /// Effective tax rate, clamped to `[0, max_rate]`.
    pub effective_rate: Decimal,

    /// `gross_income * effective_rate`, rounded to cents.
    pub tax_owed: Decimal,

    /// `gross_income - tax_owed`.
    pub disposable_income: Decimal,

    /// `disposable_income - poverty_line`; negative below the line.
    pub poverty_line_margin: Decimal,
}

impl FairTaxAssessment {
    /// Classifies the result into exactly one presentation branch.
    pub fn standing(&self) -> PovertyStanding {
        match self.poverty_line_margin.cmp(&Decimal::ZERO) {
            Ordering::Greater => PovertyStanding::Above,
            Ordering::Equal => PovertyStanding::AtLine,
            Ordering::Less => PovertyStanding::Below,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_income tests
    // =========================================================================

    #[test]
    fn parse_income_accepts_plain_numbers() {
        assert_eq!(parse_income("20000"), Ok(dec!(20000)));
        assert_eq!(parse_income("123.45"), Ok(dec!(123.45)));
    }

    #[test]
    fn parse_income_accepts_comma_separators_and_dollar_sign() {
        assert_eq!(parse_income("1,234.56"), Ok(dec!(1234.56)));
        assert_eq!(parse_income("$20,000"), Ok(dec!(20000)));
        assert_eq!(parse_income("  $1,234,567.89  "), Ok(dec!(1234567.89)));
    }

    #[test]
    fn parse_income_accepts_negative_amounts() {
        assert_eq!(parse_income("-5000"), Ok(dec!(-5000)));
    }

    #[test]
    fn parse_income_rejects_non_numeric_text() {
        assert_eq!(
            parse_income("abc"),
            Err(FairTaxError::InvalidIncome("abc".to_string()))
        );
    }

    #[test]
    fn parse_income_rejects_empty_text() {
        assert_eq!(parse_income(""), Err(FairTaxError::InvalidIncome(String::new())));
        assert!(parse_income("   ").is_err());
    }

    // =========================================================================
    // FairTaxInput::from_raw tests
    // =========================================================================

    #[test]
    fn from_raw_builds_a_validated_input() {
        let input = FairTaxInput::from_raw("hi", 2, "30,000").unwrap();

        assert_eq!(input, FairTaxInput::new(StateCode::HI, 2, dec!(30000)));
    }

    #[test]
    fn from_raw_rejects_unknown_state() {
        let result = FairTaxInput::from_raw("ZZ", 1, "100");

        assert_eq!(result, Err(FairTaxError::UnknownState("ZZ".to_string())));
    }

    #[test]
    fn from_raw_rejects_zero_family_size() {
        let result = FairTaxInput::from_raw("TX", 0, "100");

        assert_eq!(result, Err(FairTaxError::InvalidFamilySize(0)));
    }

    #[test]
    fn from_raw_rejects_unparsable_income() {
        let result = FairTaxInput::from_raw("TX", 1, "lots");

        assert_eq!(result, Err(FairTaxError::InvalidIncome("lots".to_string())));
    }

    // =========================================================================
    // standing tests
    // =========================================================================

    fn assessment_with_margin(margin: Decimal) -> FairTaxAssessment {
        FairTaxAssessment {
            poverty_line: dec!(13860),
            effective_rate: Decimal::ZERO,
            tax_owed: Decimal::ZERO,
            disposable_income: dec!(13860) + margin,
            poverty_line_margin: margin,
        }
    }

    #[test]
    fn positive_margin_is_above_the_line() {
        assert_eq!(assessment_with_margin(dec!(0.01)).standing(), PovertyStanding::Above);
    }

    #[test]
    fn zero_margin_is_exactly_at_the_line() {
        assert_eq!(assessment_with_margin(Decimal::ZERO).standing(), PovertyStanding::AtLine);
    }

    #[test]
    fn negative_margin_is_below_the_line() {
        assert_eq!(assessment_with_margin(dec!(-990)).standing(), PovertyStanding::Below);
    }
}
