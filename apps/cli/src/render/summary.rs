use ppfcalc_core::format::format_currency;
use ppfcalc_core::CalculationSummary;

/// Renders the three headline figures, one per line.
pub fn render_summary(summary: &CalculationSummary) -> String {
    let rows = [
        ("Total Investment", summary.total_contributed),
        ("Total Interest", summary.total_interest),
        ("Maturity Amount", summary.final_balance),
    ];
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, amount) in rows {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            label,
            format_currency(amount),
            width = label_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_summary() {
        let summary = CalculationSummary {
            total_contributed: dec!(1500000),
            total_interest: dec!(1212139.48),
            final_balance: dec!(2712139.48),
        };

        assert_eq!(
            render_summary(&summary),
            "Total Investment  ₹15,00,000\n\
             Total Interest    ₹12,12,139\n\
             Maturity Amount   ₹27,12,139\n"
        );
    }
}
