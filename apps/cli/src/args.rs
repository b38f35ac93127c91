use clap::Parser;
use ppfcalc_core::constants::{DEFAULT_RATE_PERCENT, DEFAULT_YEARS};
use rust_decimal::Decimal;

use crate::config::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Public Provident Fund maturity calculator")]
pub struct Args {
    /// Amount deposited every year
    #[arg(short, long)]
    pub contribution: Decimal,

    /// Number of yearly deposits
    #[arg(short, long, default_value_t = DEFAULT_YEARS)]
    pub years: u32,

    /// Annual interest rate in percent
    #[arg(short, long, default_value_t = DEFAULT_RATE_PERCENT)]
    pub rate: Decimal,

    /// Output format; overrides PPF_OUTPUT
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only require positive values, skipping the scheme's deposit and period limits
    #[arg(long)]
    pub no_policy: bool,

    /// Leave the chart out of text output
    #[arg(long)]
    pub no_chart: bool,

    /// Chart bar width in columns; overrides PPF_CHART_WIDTH
    #[arg(long)]
    pub chart_width: Option<usize>,
}
