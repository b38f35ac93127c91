//! ppfcalc Core - compounding calculator, contribution policy and formatting.
//!
//! This crate contains the numeric core of the savings calculator. It performs
//! no I/O; presentation (tables, charts, terminal output) lives in the CLI app.

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod format;
pub mod policy;

// Re-export the calculator surface
pub use calculator::*;
pub use policy::ContributionPolicy;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
