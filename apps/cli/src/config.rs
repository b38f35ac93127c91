use std::str::FromStr;

use clap::ValueEnum;
use ppfcalc_core::constants::{PPF_MAX_CONTRIBUTION, PPF_MIN_CONTRIBUTION, PPF_MIN_YEARS};
use ppfcalc_core::{ContributionPolicy, Error, Result};
use rust_decimal::Decimal;

pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const MIN_CHART_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    pub chart_width: usize,
    pub policy: ContributionPolicy,
}

impl Config {
    /// Reads configuration from the process environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("PPF_LOG_FORMAT") {
            Some(value) => parse_enum::<LogFormat>("PPF_LOG_FORMAT", &value)?,
            None => LogFormat::Text,
        };
        let output = match lookup("PPF_OUTPUT") {
            Some(value) => parse_enum::<OutputFormat>("PPF_OUTPUT", &value)?,
            None => OutputFormat::Text,
        };
        let chart_width = match lookup("PPF_CHART_WIDTH") {
            Some(value) => check_chart_width(parse_value("PPF_CHART_WIDTH", &value)?)?,
            None => DEFAULT_CHART_WIDTH,
        };

        let min_contribution = match lookup("PPF_MIN_CONTRIBUTION") {
            Some(value) => parse_value::<Decimal>("PPF_MIN_CONTRIBUTION", &value)?,
            None => PPF_MIN_CONTRIBUTION,
        };
        let max_contribution = match lookup("PPF_MAX_CONTRIBUTION") {
            Some(value) => parse_value::<Decimal>("PPF_MAX_CONTRIBUTION", &value)?,
            None => PPF_MAX_CONTRIBUTION,
        };
        let min_years = match lookup("PPF_MIN_YEARS") {
            Some(value) => parse_value::<u32>("PPF_MIN_YEARS", &value)?,
            None => PPF_MIN_YEARS,
        };
        let max_years = lookup("PPF_MAX_YEARS")
            .map(|value| parse_value::<u32>("PPF_MAX_YEARS", &value))
            .transpose()?;

        let policy =
            ContributionPolicy::new(min_contribution, max_contribution, min_years, max_years)
                .map_err(|e| Error::InvalidConfigValue(format!("contribution policy: {}", e)))?;

        Ok(Self {
            log_format,
            output,
            chart_width,
            policy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
            chart_width: DEFAULT_CHART_WIDTH,
            policy: ContributionPolicy::default(),
        }
    }
}

pub fn check_chart_width(width: usize) -> Result<usize> {
    if width < MIN_CHART_WIDTH {
        return Err(Error::InvalidConfigValue(format!(
            "chart width must be at least {}, got {}",
            MIN_CHART_WIDTH, width
        )));
    }
    Ok(width)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, value)))
}

fn parse_enum<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    <T as ValueEnum>::from_str(value.trim(), true)
        .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.chart_width, DEFAULT_CHART_WIDTH);
        assert_eq!(config.policy, ContributionPolicy::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PPF_LOG_FORMAT", "JSON"),
            ("PPF_OUTPUT", "json"),
            ("PPF_CHART_WIDTH", " 60 "),
            ("PPF_MIN_CONTRIBUTION", "1000"),
            ("PPF_MAX_CONTRIBUTION", "200000"),
            ("PPF_MIN_YEARS", "5"),
            ("PPF_MAX_YEARS", "50"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.chart_width, 60);
        assert_eq!(config.policy.min_contribution(), dec!(1000));
        assert_eq!(config.policy.max_contribution(), dec!(200000));
        assert_eq!(config.policy.min_periods(), 5);
        assert_eq!(config.policy.max_periods(), Some(50));
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = Config::from_lookup(lookup(&[("PPF_CHART_WIDTH", "wide")])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfigValue("PPF_CHART_WIDTH=wide".to_string())
        );

        assert!(Config::from_lookup(lookup(&[("PPF_CHART_WIDTH", "3")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PPF_OUTPUT", "yaml")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PPF_MIN_YEARS", "-1")])).is_err());
    }

    #[test]
    fn test_malformed_decimal_is_a_config_error() {
        let err =
            Config::from_lookup(lookup(&[("PPF_MAX_CONTRIBUTION", "1.5.0")])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfigValue("PPF_MAX_CONTRIBUTION=1.5.0".to_string())
        );
    }

    #[test]
    fn test_rejects_inconsistent_policy() {
        let err = Config::from_lookup(lookup(&[
            ("PPF_MIN_CONTRIBUTION", "5000"),
            ("PPF_MAX_CONTRIBUTION", "1000"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
