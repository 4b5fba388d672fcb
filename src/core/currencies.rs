//! ISO 4217 currency minor units and monetary rounding.
//!
//! Amounts coming out of the KPI engine are rounded to the accounting
//! currency's precision first, then to the reported precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    minor_units(code).is_some()
}

/// Number of decimal places of the currency's minor unit.
pub fn minor_units(code: &str) -> Option<u32> {
    CURRENCY_MINOR_UNITS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .and_then(|i| CURRENCY_MINOR_UNITS.get(i))
        .map(|(_, units)| *units)
}

/// Round an amount to the currency precision (unknown currencies use 2),
/// then to `decimals` places. Midpoints round away from zero.
pub fn round_monetary(amount: Decimal, currency_code: &str, decimals: u32) -> Decimal {
    let currency_dp = minor_units(currency_code).unwrap_or(2);
    amount
        .round_dp_with_strategy(currency_dp, RoundingStrategy::MidpointAwayFromZero)
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// ISO 4217 codes with their minor-unit exponent (sorted for binary search).
static CURRENCY_MINOR_UNITS: &[(&str, u32)] = &[
    ("AED", 2), // UAE Dirham
    ("AUD", 2), // Australian Dollar
    ("BGN", 2), // Bulgarian Lev
    ("BHD", 3), // Bahraini Dinar
    ("BRL", 2), // Brazilian Real
    ("CAD", 2), // Canadian Dollar
    ("CHF", 2), // Swiss Franc
    ("CNY", 2), // Chinese Yuan
    ("CZK", 2), // Czech Koruna
    ("DKK", 2), // Danish Krone
    ("EUR", 2), // Euro
    ("GBP", 2), // Pound Sterling
    ("HUF", 2), // Hungarian Forint
    ("ISK", 0), // Icelandic Krona
    ("JPY", 0), // Japanese Yen
    ("KRW", 0), // South Korean Won
    ("KWD", 3), // Kuwaiti Dinar
    ("NOK", 2), // Norwegian Krone
    ("PLN", 2), // Polish Zloty
    ("RON", 2), // Romanian Leu
    ("SEK", 2), // Swedish Krona
    ("TND", 3), // Tunisian Dinar
    ("TRY", 2), // Turkish Lira
    ("USD", 2), // US Dollar
];
