//! Presentation shell for the fair-tax calculator. All number formatting
//! lives here; the core only deals in decimals.

pub mod report;
