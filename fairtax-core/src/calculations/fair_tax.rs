//! The fair-tax rule.
//!
//! Income at or below the state- and family-size-dependent poverty line is
//! exempt; a flat marginal constant applies to the share of income above the
//! line; the effective rate never exceeds the cap.
//!
//! # Calculation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Poverty line: `base + (family − 1) × increment` from the state's guideline set |
//! | 2    | Raw rate: `constant × (income − poverty line) / income` |
//! | 3    | Effective rate: raw rate clamped to `[0, cap]` |
//! | 4    | Tax owed: `income × effective rate`, rounded to cents |
//! | 5    | Disposable income: `income − tax`; margin: `disposable − poverty line` |
//!
//! # Example
//!
//! ```
//! use fairtax_core::{FairTaxCalculator, FairTaxInput, StateCode};
//! use rust_decimal_macros::dec;
//!
//! let input = FairTaxInput::new(StateCode::HI, 1, dec!(20000));
//! let assessment = FairTaxCalculator::default().calculate(&input).unwrap();
//!
//! assert_eq!(assessment.poverty_line, dec!(15060));
//! assert_eq!(assessment.effective_rate, dec!(0.06175));
//! assert_eq!(assessment.tax_owed, dec!(1235.00));
//! assert_eq!(assessment.disposable_income, dec!(18765.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{clamp, round_half_up};
use crate::error::FairTaxError;
use crate::models::{FairTaxAssessment, FairTaxInput};

/// Policy constants for the fair-tax rule.
///
/// Configurable so the rate cap is independently testable; production use
/// is the default (0.25 marginal constant, 0.50 cap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairTaxPolicy {
    /// Marginal constant applied to income above the poverty line.
    pub tax_constant: Decimal,

    /// Ceiling on the effective rate.
    pub max_rate: Decimal,
}

impl Default for FairTaxPolicy {
    fn default() -> Self {
        Self {
            tax_constant: dec!(0.25),
            max_rate: dec!(0.50),
        }
    }
}

/// Calculator for the fair-tax rule.
///
/// Stateless between invocations: each call computes a fresh
/// [`FairTaxAssessment`] from its input alone.
#[derive(Debug, Clone, Default)]
pub struct FairTaxCalculator {
    policy: FairTaxPolicy,
}

impl FairTaxCalculator {
    pub fn new(policy: FairTaxPolicy) -> Self {
        Self { policy }
    }

    /// Runs one calculation.
    ///
    /// Negative income is accepted and flows through the same arithmetic;
    /// the clamp keeps the rate within policy bounds either way.
    ///
    /// # Errors
    ///
    /// - [`FairTaxError::InvalidFamilySize`] if the family size is below one
    /// - [`FairTaxError::ZeroIncome`] if the income is exactly zero (the
    ///   raw-rate formula divides by income)
    pub fn calculate(
        &self,
        input: &FairTaxInput,
    ) -> Result<FairTaxAssessment, FairTaxError> {
        if input.family_size < 1 {
            return Err(FairTaxError::InvalidFamilySize(input.family_size));
        }
        if input.gross_income == Decimal::ZERO {
            return Err(FairTaxError::ZeroIncome);
        }

        let poverty_line = input.state.poverty_guideline().poverty_line(input.family_size);
        debug!(state = input.state.name(), %poverty_line, "resolved poverty guideline");

        let effective_rate = self.effective_rate(input.gross_income, poverty_line);
        let tax_owed = round_half_up(input.gross_income * effective_rate);
        let disposable_income = input.gross_income - tax_owed;
        let poverty_line_margin = disposable_income - poverty_line;

        Ok(FairTaxAssessment {
            poverty_line,
            effective_rate,
            tax_owed,
            disposable_income,
            poverty_line_margin,
        })
    }

    /// Marginal rate on the share of income above the poverty line, clamped
    /// so income at or below the line pays nothing and the rate never
    /// exceeds the cap.
    fn effective_rate(
        &self,
        income: Decimal,
        poverty_line: Decimal,
    ) -> Decimal {
        let raw = self.policy.tax_constant * (income - poverty_line) / income;
        clamp(raw, Decimal::ZERO, self.policy.max_rate)
    }
}
