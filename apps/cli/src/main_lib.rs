use anyhow::Context;
use ppfcalc_core::{
    CalculationInput, CalculatorService, CalculatorServiceTrait, NewCalculationInput,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::args::Args;
use crate::config::{check_chart_width, Config, LogFormat, OutputFormat};
use crate::render::{render_json, render_text, RenderOptions, Report};

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Validates the arguments, runs the calculation and renders the output.
pub fn run(args: &Args, config: &Config) -> anyhow::Result<String> {
    let raw = NewCalculationInput {
        contribution_per_period: args.contribution,
        num_periods: args.years,
        annual_rate_percent: args.rate,
    };

    let service = CalculatorService::new(config.policy);
    let input = if args.no_policy {
        CalculationInput::try_from(raw).map_err(anyhow::Error::from)
    } else {
        service.validate(raw).map_err(anyhow::Error::from)
    }
    .context("Invalid calculator input")?;

    let result = service
        .calculate_unchecked(&input)
        .context("Calculation failed")?;

    tracing::info!(
        years = input.num_periods(),
        maturity = %result.final_balance,
        "Calculation complete"
    );

    let report = Report::new(&input, result);
    match args.format.unwrap_or(config.output) {
        OutputFormat::Json => render_json(&report).context("Failed to serialize report"),
        OutputFormat::Text => {
            let chart_width = if args.no_chart {
                None
            } else {
                let width = args.chart_width.unwrap_or(config.chart_width);
                Some(check_chart_width(width)?)
            };
            Ok(render_text(&report, RenderOptions { chart_width }))
        }
    }
}
