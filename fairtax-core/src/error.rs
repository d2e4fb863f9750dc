use thiserror::Error;

/// Validation failures at the calculation boundary.
///
/// Every failure is returned as a value; nothing panics across the API.
/// The first three are recoverable input problems a caller can surface and
/// retry; [`UnknownState`](FairTaxError::UnknownState) is an integration
/// error that a selection surface restricted to
/// [`StateCode::ALL`](crate::models::StateCode::ALL) can never produce.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FairTaxError {
    /// A code outside the fixed set of 50 states.
    #[error("unknown state code '{0}'")]
    UnknownState(String),

    /// Family size below one.
    #[error("family size must be at least 1, got {0}")]
    InvalidFamilySize(u32),

    /// Income text that does not parse as a dollar amount.
    #[error("'{0}' is not a valid income amount")]
    InvalidIncome(String),

    /// Income of exactly zero. The marginal-rate formula divides by income,
    /// so no rate is defined here.
    #[error("income must be nonzero to compute a tax rate")]
    ZeroIncome,
}
