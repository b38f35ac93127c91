//! Growth chart: per-year series and a horizontal bar renderer.

use ppfcalc_core::format::format_currency;
use ppfcalc_core::PeriodRecord;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

const GLYPHS: [char; 4] = ['▒', '█', '░', '▓'];

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub values: Vec<Decimal>,
}

/// Chart series for a breakdown: one label per year, one dataset per plotted
/// quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Annual investment against total balance, year by year.
    pub fn from_periods(periods: &[PeriodRecord]) -> Self {
        ChartData {
            labels: periods
                .iter()
                .map(|record| format!("Year {}", record.period_index))
                .collect(),
            datasets: vec![
                ChartDataset {
                    label: "Annual Investment".to_string(),
                    values: periods.iter().map(|record| record.contribution).collect(),
                },
                ChartDataset {
                    label: "Total Balance".to_string(),
                    values: periods.iter().map(|record| record.balance_after).collect(),
                },
            ],
        }
    }

    fn max_value(&self) -> Decimal {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.values.iter().copied())
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Renders a [`ChartData`] as overlaid horizontal bars scaled from zero.
///
/// Create one per render and drop it afterwards; it holds no data between
/// renders.
#[derive(Debug)]
pub struct TextChart {
    width: usize,
}

impl TextChart {
    pub fn new(width: usize) -> Self {
        TextChart { width }
    }

    pub fn render(&self, data: &ChartData) -> String {
        let mut out = String::new();

        let legend: Vec<String> = data
            .datasets
            .iter()
            .enumerate()
            .map(|(i, dataset)| format!("{} {}", glyph(i), dataset.label))
            .collect();
        out.push_str(&legend.join("   "));
        out.push('\n');

        let max = data.max_value();
        let label_width = data
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        for (row, label) in data.labels.iter().enumerate() {
            let values: Vec<Decimal> = data
                .datasets
                .iter()
                .map(|dataset| dataset.values.get(row).copied().unwrap_or(Decimal::ZERO))
                .collect();
            let amounts: Vec<String> = values.iter().map(|v| format_currency(*v)).collect();

            out.push_str(&format!(
                "{:>label_width$} │{}│ {}\n",
                label,
                self.bar(&values, max),
                amounts.join(" / "),
                label_width = label_width
            ));
        }
        out
    }

    /// Draws the longest bar first so shorter series stay visible on top.
    fn bar(&self, values: &[Decimal], max: Decimal) -> String {
        let mut cells = vec![' '; self.width];

        let mut lengths: Vec<(usize, usize)> = values
            .iter()
            .enumerate()
            .map(|(i, value)| (i, self.scaled_length(*value, max)))
            .collect();
        lengths.sort_by(|a, b| b.1.cmp(&a.1));

        for (i, length) in lengths {
            for cell in cells.iter_mut().take(length) {
                *cell = glyph(i);
            }
        }
        cells.into_iter().collect()
    }

    fn scaled_length(&self, value: Decimal, max: Decimal) -> usize {
        if max <= Decimal::ZERO || value <= Decimal::ZERO {
            return 0;
        }
        let ratio = (value / max).to_f64().unwrap_or(0.0);
        let length = (ratio * self.width as f64).round() as usize;
        length.clamp(1, self.width)
    }
}

fn glyph(index: usize) -> char {
    GLYPHS[index % GLYPHS.len()]
}
