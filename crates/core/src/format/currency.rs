//! Indian-locale rendering of rupee amounts.
//!
//! Digits are grouped as thousands first and then in pairs (lakh, crore):
//! 2712139 is written `27,12,139`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, NUMBER_FRACTION_DIGITS};

/// Formats an amount as whole rupees, e.g. `₹1,50,000`.
///
/// Fractions are rounded half away from zero.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_indian(&digits))
}

/// Formats a plain number with Indian grouping and at most three fraction
/// digits, e.g. `12,34,567.891`.
pub fn format_number(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(NUMBER_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = rounded.abs().to_string();
    match text.split_once('.') {
        Some((integer, fraction)) => format!("{}{}.{}", sign, group_indian(integer), fraction),
        None => format!("{}{}", sign, group_indian(&text)),
    }
}

/// Inserts Indian-style separators into a string of ASCII digits.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("500"), "500");
        assert_eq!(group_indian("1500"), "1,500");
        assert_eq!(group_indian("150000"), "1,50,000");
        assert_eq!(group_indian("2712139"), "27,12,139");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_rupees() {
        assert_eq!(format_currency(dec!(150000)), "₹1,50,000");
        assert_eq!(format_currency(dec!(2712139.480191937)), "₹27,12,139");
        assert_eq!(format_currency(dec!(7100.5)), "₹7,101");
        assert_eq!(format_currency(dec!(0.4)), "₹0");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1500.5)), "-₹1,501");
        assert_eq!(format_currency(dec!(-0.2)), "₹0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec!(1234567.8912)), "12,34,567.891");
        assert_eq!(format_number(dec!(100000.000)), "1,00,000");
        assert_eq!(format_number(dec!(7.1)), "7.1");
        assert_eq!(format_number(dec!(-2500.25)), "-2,500.25");
        assert_eq!(format_number(Decimal::ZERO), "0");
    }
}
