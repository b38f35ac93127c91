use log::{debug, warn};

use crate::errors::Result;
use crate::policy::ContributionPolicy;

use super::calculator_model::{
    CalculationInput, CalculationResult, CalculationSummary, NewCalculationInput,
};
use super::calculator_traits::CalculatorServiceTrait;
use super::compounding;

/// Runs calculations after checking them against a contribution policy.
pub struct CalculatorService {
    policy: ContributionPolicy,
}

impl CalculatorService {
    pub fn new(policy: ContributionPolicy) -> Self {
        CalculatorService { policy }
    }

    fn check_policy(&self, input: &CalculationInput) -> Result<()> {
        self.policy.check(input).map_err(|err| {
            warn!("Rejected calculation input {:?}: {}", input, err);
            err.into()
        })
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        CalculatorService::new(ContributionPolicy::default())
    }
}

impl CalculatorServiceTrait for CalculatorService {
    fn policy(&self) -> &ContributionPolicy {
        &self.policy
    }

    /// Checks raw input against the policy first and only then for
    /// positivity, so an out-of-range contribution wins over a zero rate.
    fn validate(&self, input: NewCalculationInput) -> Result<CalculationInput> {
        self.policy.check_new(&input).map_err(|err| {
            warn!("Rejected calculation input {:?}: {}", input, err);
            err
        })?;
        Ok(CalculationInput::try_from(input)?)
    }

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult> {
        self.check_policy(input)?;
        self.calculate_unchecked(input)
    }

    /// Skips the policy; used for live recalculation where only the
    /// positivity guaranteed by `CalculationInput` is required.
    fn calculate_unchecked(&self, input: &CalculationInput) -> Result<CalculationResult> {
        debug!(
            "Calculating {} periods of {} at {}%",
            input.num_periods(),
            input.contribution_per_period(),
            input.annual_rate_percent()
        );
        Ok(compounding::compute(input)?)
    }

    fn summarize(&self, input: &CalculationInput) -> Result<CalculationSummary> {
        self.check_policy(input)?;
        Ok(compounding::summarize(input)?)
    }
}
