use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest yearly deposit accepted by the scheme
pub const PPF_MIN_CONTRIBUTION: Decimal = dec!(500);

/// Largest yearly deposit accepted by the scheme
pub const PPF_MAX_CONTRIBUTION: Decimal = dec!(150000);

/// Lock-in period in years
pub const PPF_MIN_YEARS: u32 = 15;

/// Default number of years for a new calculation
pub const DEFAULT_YEARS: u32 = 15;

/// Default annual rate in percent
pub const DEFAULT_RATE_PERCENT: Decimal = dec!(7.1);

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: &str = "₹";

/// Fraction digits kept by `format_number`
pub const NUMBER_FRACTION_DIGITS: u32 = 3;
