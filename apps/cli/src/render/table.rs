use ppfcalc_core::format::format_currency;
use ppfcalc_core::PeriodRecord;

const HEADERS: [&str; 4] = ["Year", "Investment", "Interest Earned", "Balance"];

/// Renders the per-year breakdown as a right-aligned text table.
pub fn render_breakdown(periods: &[PeriodRecord]) -> String {
    let rows: Vec<[String; 4]> = periods
        .iter()
        .map(|record| {
            [
                record.period_index.to_string(),
                format_currency(record.contribution),
                format_currency(record.interest_earned),
                format_currency(record.balance_after),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS[..], &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule[..], &widths);
    for row in &rows {
        push_row(&mut out, &row[..], &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:>width$}", cell.as_ref(), width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_breakdown() {
        let periods = [
            PeriodRecord {
                period_index: 1,
                contribution: dec!(100000),
                interest_earned: dec!(7100),
                balance_after: dec!(107100),
            },
            PeriodRecord {
                period_index: 2,
                contribution: dec!(100000),
                interest_earned: dec!(14704.10),
                balance_after: dec!(221804.10),
            },
        ];

        let table = render_breakdown(&periods);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Year  Investment  Interest Earned    Balance");
        assert_eq!(lines[1], "----  ----------  ---------------  ---------");
        assert_eq!(lines[2], "   1   ₹1,00,000           ₹7,100  ₹1,07,100");
        assert_eq!(lines[3], "   2   ₹1,00,000          ₹14,704  ₹2,21,804");
    }

    #[test]
    fn test_render_empty_breakdown_has_header_only() {
        assert_eq!(render_breakdown(&[]).lines().count(), 2);
    }
}
