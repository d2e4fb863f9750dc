use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::StateCode;

/// Poverty-line parameters for one guideline set (2021 HHS figures).
///
/// There are exactly three sets: Hawaii, Alaska, and one shared by the 48
/// contiguous states. That three-way split is the real domain logic of the
/// table, so it is kept as three named constructors rather than flattened
/// into 50 identical entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PovertyGuideline {
    /// Threshold for a family of one.
    pub base_threshold: Decimal,

    /// Amount added per additional family member.
    pub increment_per_person: Decimal,
}

impl PovertyGuideline {
    /// Hawaii guideline set.
    pub fn hawaii() -> Self {
        Self {
            base_threshold: dec!(15060),
            increment_per_person: dec!(5230),
        }
    }

    /// Alaska guideline set.
    pub fn alaska() -> Self {
        Self {
            base_threshold: dec!(12060),
            increment_per_person: dec!(4810),
        }
    }

    /// Guideline set shared by the 48 contiguous states.
    pub fn contiguous() -> Self {
        Self {
            base_threshold: dec!(13860),
            increment_per_person: dec!(4810),
        }
    }

    /// Guideline set for a state. Only Hawaii and Alaska differ from the
    /// contiguous set.
    pub fn for_state(state: StateCode) -> Self {
        match state {
            StateCode::HI => Self::hawaii(),
            StateCode::AK => Self::alaska(),
            _ => Self::contiguous(),
        }
    }

    /// Poverty line for a family of `family_size`.
    ///
    /// Sizes below one are treated as one; callers validate family size
    /// before asking for a threshold.
    pub fn poverty_line(&self, family_size: u32) -> Decimal {
        let additional = Decimal::from(family_size.saturating_sub(1));
        self.base_threshold + additional * self.increment_per_person
    }
}
