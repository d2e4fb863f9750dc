//! Core fair-tax calculation: pure, synchronous, no I/O.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{FairTaxCalculator, FairTaxPolicy};
pub use error::FairTaxError;
pub use models::*;
