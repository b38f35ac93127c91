//! Calculator domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Raw calculator input, as typed by a user or read from JSON.
///
/// Nothing is checked at this stage; convert it into a [`CalculationInput`]
/// to validate it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculationInput {
    pub contribution_per_period: Decimal,
    pub num_periods: u32,
    pub annual_rate_percent: Decimal,
}

/// Validated calculator input.
///
/// All three values are strictly positive. The fields are private so the
/// only way to obtain one is through [`CalculationInput::new`] or a
/// conversion from [`NewCalculationInput`], both of which check this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "NewCalculationInput")]
pub struct CalculationInput {
    contribution_per_period: Decimal,
    num_periods: u32,
    annual_rate_percent: Decimal,
}

impl CalculationInput {
    pub fn new(
        contribution_per_period: Decimal,
        num_periods: u32,
        annual_rate_percent: Decimal,
    ) -> Result<Self, ValidationError> {
        if contribution_per_period <= Decimal::ZERO {
            return Err(ValidationError::NonPositive {
                field: "Annual investment",
            });
        }
        if num_periods == 0 {
            return Err(ValidationError::NonPositive {
                field: "Investment period",
            });
        }
        if annual_rate_percent <= Decimal::ZERO {
            return Err(ValidationError::NonPositive {
                field: "Interest rate",
            });
        }

        Ok(Self {
            contribution_per_period,
            num_periods,
            annual_rate_percent,
        })
    }

    pub fn contribution_per_period(&self) -> Decimal {
        self.contribution_per_period
    }

    pub fn num_periods(&self) -> u32 {
        self.num_periods
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Rate applied to the balance each period, as a fraction (7.1% -> 0.071).
    pub fn rate_fraction(&self) -> Decimal {
        self.annual_rate_percent / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<NewCalculationInput> for CalculationInput {
    type Error = ValidationError;

    fn try_from(raw: NewCalculationInput) -> Result<Self, Self::Error> {
        CalculationInput::new(
            raw.contribution_per_period,
            raw.num_periods,
            raw.annual_rate_percent,
        )
    }
}

impl From<CalculationInput> for NewCalculationInput {
    fn from(input: CalculationInput) -> Self {
        NewCalculationInput {
            contribution_per_period: input.contribution_per_period,
            num_periods: input.num_periods,
            annual_rate_percent: input.annual_rate_percent,
        }
    }
}

/// One compounding period of the breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    /// 1-based period number
    pub period_index: u32,
    pub contribution: Decimal,
    pub interest_earned: Decimal,
    pub balance_after: Decimal,
}

/// Headline figures of a calculation, without the per-period breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub total_contributed: Decimal,
    pub total_interest: Decimal,
    pub final_balance: Decimal,
}

/// Full calculation output: headline figures plus the breakdown ordered by
/// period, one record per period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_contributed: Decimal,
    pub total_interest: Decimal,
    pub final_balance: Decimal,
    pub periods: Vec<PeriodRecord>,
}

impl CalculationResult {
    pub fn summary(&self) -> CalculationSummary {
        CalculationSummary {
            total_contributed: self.total_contributed,
            total_interest: self.total_interest,
            final_balance: self.final_balance,
        }
    }
}
