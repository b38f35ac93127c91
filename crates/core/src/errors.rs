//! Core error types for the calculator.
//!
//! Two classes of failure exist: input that violates the calculator's own
//! preconditions or the configured contribution policy, and decimal overflow
//! while compounding very large balances.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::format::format_currency;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for calculator input and policy checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} should be greater than 0")]
    NonPositive { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Annual investment should be between {} and {}",
        format_currency(*min),
        format_currency(*max)
    )]
    ContributionOutOfRange { min: Decimal, max: Decimal },

    #[error("Minimum investment period is {min} years")]
    PeriodTooShort { min: u32 },

    #[error("Maximum investment period is {max} years")]
    PeriodTooLong { max: u32 },
}

/// Errors raised while running the compounding recurrence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Balance overflowed the decimal range in period {period}")]
    Overflow { period: u32 },
}
