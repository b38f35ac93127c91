//! Calculator module - compounding recurrence, domain models and service.

mod calculator_model;
mod calculator_service;
mod calculator_traits;
mod compounding;

pub use calculator_model::{
    CalculationInput, CalculationResult, CalculationSummary, NewCalculationInput, PeriodRecord,
};
pub use calculator_service::CalculatorService;
pub use calculator_traits::CalculatorServiceTrait;
pub use compounding::{compute, schedule, summarize, Schedule};
