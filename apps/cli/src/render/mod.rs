//! Terminal presentation of a calculation: summary, breakdown table and chart.

mod chart;
mod summary;
mod table;

pub use chart::{ChartData, ChartDataset, TextChart};
pub use summary::render_summary;
pub use table::render_breakdown;

use ppfcalc_core::{CalculationInput, CalculationResult, NewCalculationInput};
use serde::Serialize;

/// Everything produced by one calculation, ready to be rendered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub input: NewCalculationInput,
    pub result: CalculationResult,
    pub chart: ChartData,
}

impl Report {
    pub fn new(input: &CalculationInput, result: CalculationResult) -> Self {
        let chart = ChartData::from_periods(&result.periods);
        Report {
            input: NewCalculationInput::from(*input),
            result,
            chart,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Bar width in columns; `None` leaves the chart out.
    pub chart_width: Option<usize>,
}

pub fn render_text(report: &Report, options: RenderOptions) -> String {
    let mut out = String::new();

    out.push_str(&render_summary(&report.result.summary()));
    out.push('\n');
    out.push_str(&render_breakdown(&report.result.periods));

    if let Some(width) = options.chart_width {
        let chart = TextChart::new(width);
        out.push('\n');
        out.push_str(&chart.render(&report.chart));
    }
    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
