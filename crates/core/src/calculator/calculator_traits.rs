use crate::calculator::calculator_model::{
    CalculationInput, CalculationResult, CalculationSummary, NewCalculationInput,
};
use crate::errors::Result;
use crate::policy::ContributionPolicy;

/// Trait for calculator service operations
pub trait CalculatorServiceTrait: Send + Sync {
    fn policy(&self) -> &ContributionPolicy;
    fn validate(&self, input: NewCalculationInput) -> Result<CalculationInput>;
    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult>;
    fn calculate_unchecked(&self, input: &CalculationInput) -> Result<CalculationResult>;
    fn summarize(&self, input: &CalculationInput) -> Result<CalculationSummary>;
}
