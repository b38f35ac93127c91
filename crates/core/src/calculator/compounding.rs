//! The compounding recurrence.
//!
//! Each period the contribution is deposited first, then interest is accrued
//! on the whole running balance and added to it. Period N depends on the
//! balance left by period N-1, so the schedule is strictly sequential.

use log::debug;
use rust_decimal::Decimal;

use crate::errors::CalculatorError;

use super::calculator_model::{
    CalculationInput, CalculationResult, CalculationSummary, PeriodRecord,
};

/// Lazily evaluated breakdown of a calculation, one period per item.
///
/// Holds only the running balance, so walking the schedule needs constant
/// space. After an overflow the error is yielded once and iteration ends.
#[derive(Debug, Clone)]
pub struct Schedule {
    contribution: Decimal,
    rate: Decimal,
    num_periods: u32,
    completed: u32,
    balance: Decimal,
    failed: bool,
}

impl Schedule {
    fn new(input: &CalculationInput) -> Self {
        Schedule {
            contribution: input.contribution_per_period(),
            rate: input.rate_fraction(),
            num_periods: input.num_periods(),
            completed: 0,
            balance: Decimal::ZERO,
            failed: false,
        }
    }

    /// Balance after the last period yielded so far.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    fn step(&mut self, period: u32) -> Result<PeriodRecord, CalculatorError> {
        let overflow = CalculatorError::Overflow { period };

        let deposited = self
            .balance
            .checked_add(self.contribution)
            .ok_or(overflow)?;
        let interest_earned = deposited.checked_mul(self.rate).ok_or(overflow)?;
        let balance_after = deposited.checked_add(interest_earned).ok_or(overflow)?;

        self.balance = balance_after;
        Ok(PeriodRecord {
            period_index: period,
            contribution: self.contribution,
            interest_earned,
            balance_after,
        })
    }
}

impl Iterator for Schedule {
    type Item = Result<PeriodRecord, CalculatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.completed >= self.num_periods {
            return None;
        }

        let period = self.completed + 1;
        self.completed = period;

        let record = self.step(period);
        if record.is_err() {
            self.failed = true;
        }
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.num_periods - self.completed) as usize;
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for Schedule {}

/// Returns the period-by-period schedule for `input` without materialising it.
pub fn schedule(input: &CalculationInput) -> Schedule {
    Schedule::new(input)
}

/// Runs the full calculation and collects the breakdown.
///
/// The input type already guarantees positive values, so the only failure is
/// a balance that no longer fits in a `Decimal`.
pub fn compute(input: &CalculationInput) -> Result<CalculationResult, CalculatorError> {
    let periods = schedule(input).collect::<Result<Vec<_>, _>>()?;

    let final_balance = periods
        .last()
        .map(|record| record.balance_after)
        .unwrap_or(Decimal::ZERO);
    let (total_contributed, total_interest) = totals(input, final_balance)?;

    debug!(
        "Computed {} periods: contributed {}, interest {}, final balance {}",
        periods.len(),
        total_contributed,
        total_interest,
        final_balance
    );

    Ok(CalculationResult {
        total_contributed,
        total_interest,
        final_balance,
        periods,
    })
}

/// Computes only the headline figures, streaming through the schedule.
pub fn summarize(input: &CalculationInput) -> Result<CalculationSummary, CalculatorError> {
    let mut periods = schedule(input);
    for record in periods.by_ref() {
        record?;
    }

    let final_balance = periods.balance();
    let (total_contributed, total_interest) = totals(input, final_balance)?;

    Ok(CalculationSummary {
        total_contributed,
        total_interest,
        final_balance,
    })
}

/// (total contributed, total interest) for a finished schedule.
fn totals(
    input: &CalculationInput,
    final_balance: Decimal,
) -> Result<(Decimal, Decimal), CalculatorError> {
    let total_contributed = input
        .contribution_per_period()
        .checked_mul(Decimal::from(input.num_periods()))
        .ok_or(CalculatorError::Overflow {
            period: input.num_periods(),
        })?;
    Ok((total_contributed, final_balance - total_contributed))
}
