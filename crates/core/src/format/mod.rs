//! Display formatting for calculator values.
//!
//! Formatting is kept out of the calculator: results are exact decimals and
//! are only rounded here, for display.

mod currency;

pub use currency::{format_currency, format_number, group_indian};
