mod assessment;
mod poverty_guideline;
mod state;

pub use assessment::{FairTaxAssessment, FairTaxInput, PovertyStanding, parse_income};
pub use poverty_guideline::PovertyGuideline;
pub use state::StateCode;
