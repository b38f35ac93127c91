//! Contribution policy model.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{PPF_MAX_CONTRIBUTION, PPF_MIN_CONTRIBUTION, PPF_MIN_YEARS};
use crate::errors::ValidationError;

/// Domain bounds a calculation must satisfy before it is run.
///
/// These are rules of the savings scheme, not preconditions of the
/// calculator: the recurrence works for any positive input.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionPolicy {
    min_contribution: Decimal,
    max_contribution: Decimal,
    min_periods: u32,
    max_periods: Option<u32>,
}

impl ContributionPolicy {
    pub fn new(
        min_contribution: Decimal,
        max_contribution: Decimal,
        min_periods: u32,
        max_periods: Option<u32>,
    ) -> Result<Self, ValidationError> {
        if min_contribution <= Decimal::ZERO {
            return Err(ValidationError::NonPositive {
                field: "Minimum contribution",
            });
        }
        if min_contribution > max_contribution {
            return Err(ValidationError::InvalidInput(format!(
                "minimum contribution {} exceeds maximum {}",
                min_contribution, max_contribution
            )));
        }
        if min_periods == 0 {
            return Err(ValidationError::NonPositive {
                field: "Minimum period",
            });
        }
        if let Some(max) = max_periods {
            if max < min_periods {
                return Err(ValidationError::InvalidInput(format!(
                    "minimum period {} exceeds maximum {}",
                    min_periods, max
                )));
            }
        }

        Ok(Self {
            min_contribution,
            max_contribution,
            min_periods,
            max_periods,
        })
    }

    /// A policy that accepts every valid `CalculationInput`.
    pub fn unrestricted() -> Self {
        ContributionPolicy {
            min_contribution: Decimal::new(1, 28),
            max_contribution: Decimal::MAX,
            min_periods: 1,
            max_periods: None,
        }
    }

    pub fn min_contribution(&self) -> Decimal {
        self.min_contribution
    }

    pub fn max_contribution(&self) -> Decimal {
        self.max_contribution
    }

    pub fn min_periods(&self) -> u32 {
        self.min_periods
    }

    pub fn max_periods(&self) -> Option<u32> {
        self.max_periods
    }
}

impl Default for ContributionPolicy {
    /// Public Provident Fund rules: ₹500 to ₹1,50,000 a year for at least 15 years.
    fn default() -> Self {
        ContributionPolicy {
            min_contribution: PPF_MIN_CONTRIBUTION,
            max_contribution: PPF_MAX_CONTRIBUTION,
            min_periods: PPF_MIN_YEARS,
            max_periods: None,
        }
    }
}
