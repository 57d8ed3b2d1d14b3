//! Currency labels and static conversion rates
//!
//! Currency is a display concern only: the evaluator never converts amounts.
//! Rates are a fixed table, not market data.

mod format;

pub use format::{format_amount, format_money};

use serde::Serialize;

/// Display currency for a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
}

/// Countries offered on the intake form and their currencies
pub const COUNTRY_CURRENCIES: [(&str, Currency); 10] = [
    ("USA", Currency { code: "USD", symbol: "$" }),
    ("India", Currency { code: "INR", symbol: "₹" }),
    ("UK", Currency { code: "GBP", symbol: "£" }),
    ("Canada", Currency { code: "CAD", symbol: "$" }),
    ("Australia", Currency { code: "AUD", symbol: "$" }),
    ("Germany", Currency { code: "EUR", symbol: "€" }),
    ("Japan", Currency { code: "JPY", symbol: "¥" }),
    ("Brazil", Currency { code: "BRL", symbol: "R$" }),
    ("South Africa", Currency { code: "ZAR", symbol: "R" }),
    ("France", Currency { code: "EUR", symbol: "€" }),
];

/// Currency codes present in the rate table, in row/column order
pub const SUPPORTED_CODES: [&str; 10] = [
    "USD", "INR", "EUR", "GBP", "CAD", "AUD", "JPY", "BRL", "ZAR", "CNY",
];

/// RATES[from][to], indexed by position in `SUPPORTED_CODES`
const RATES: [[f64; 10]; 10] = [
    //  USD     INR     EUR     GBP     CAD     AUD     JPY     BRL    ZAR     CNY
    [1.00, 74.50, 0.85, 0.75, 1.25, 1.35, 110.00, 5.50, 15.00, 6.45],           // USD
    [0.013, 1.00, 0.011, 0.010, 0.017, 0.018, 1.47, 0.074, 0.20, 0.086],        // INR
    [1.18, 87.77, 1.00, 0.88, 1.47, 1.59, 129.41, 6.47, 17.65, 7.61],           // EUR
    [1.33, 98.80, 1.14, 1.00, 1.66, 1.79, 146.67, 7.29, 19.88, 8.57],           // GBP
    [0.80, 59.60, 0.68, 0.60, 1.00, 1.08, 88.00, 4.40, 12.00, 5.16],            // CAD
    [0.74, 55.19, 0.63, 0.56, 0.93, 1.00, 81.48, 4.07, 11.11, 4.78],            // AUD
    [0.0091, 0.68, 0.0077, 0.0068, 0.0114, 0.0123, 1.00, 0.050, 0.136, 0.0586], // JPY
    [0.182, 13.55, 0.155, 0.137, 0.227, 0.246, 20.00, 1.00, 2.73, 1.173],       // BRL
    [0.067, 4.97, 0.057, 0.050, 0.083, 0.090, 7.33, 0.367, 1.00, 0.430],        // ZAR
    [0.155, 11.63, 0.131, 0.117, 0.194, 0.209, 17.07, 0.852, 2.326, 1.00],      // CNY
];

/// Look up the display currency for a country name
pub fn currency_for_country(country: &str) -> Option<Currency> {
    COUNTRY_CURRENCIES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, currency)| *currency)
}

/// Currency symbol for a country, empty when the country is not listed
pub fn symbol_for_country(country: &str) -> &'static str {
    currency_for_country(country).map(|c| c.symbol).unwrap_or("")
}

fn code_index(code: &str) -> Option<usize> {
    SUPPORTED_CODES.iter().position(|c| *c == code)
}

/// Fixed from→to rate, `None` when the pair is not in the table
pub fn rate(from: &str, to: &str) -> Option<f64> {
    let from = code_index(from)?;
    let to = code_index(to)?;
    Some(RATES[from][to])
}

/// Convert an amount between currency codes, `None` when conversion is unavailable
pub fn convert(amount: f64, from: &str, to: &str) -> Option<f64> {
    rate(from, to).map(|r| amount * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_country_currency() {
        assert_eq!(currency_for_country("India").unwrap().code, "INR");
        assert_eq!(currency_for_country("France").unwrap().symbol, "€");
        assert_eq!(currency_for_country("South Africa").unwrap().symbol, "R");
        assert!(currency_for_country("Atlantis").is_none());
        assert_eq!(symbol_for_country("Atlantis"), "");
    }

    #[test]
    fn test_identity_rates() {
        for code in SUPPORTED_CODES {
            assert_eq!(rate(code, code), Some(1.0), "{}", code);
        }
    }

    #[test]
    fn test_convert() {
        assert_relative_eq!(convert(1000.0, "USD", "INR").unwrap(), 74_500.0, epsilon = 1e-6);
        assert_relative_eq!(convert(100.0, "GBP", "EUR").unwrap(), 114.0, epsilon = 1e-9);
        assert_relative_eq!(convert(10.0, "CNY", "ZAR").unwrap(), 23.26, epsilon = 1e-9);
    }

    #[test]
    fn test_unsupported_pair() {
        assert!(convert(1.0, "USD", "CHF").is_none());
        assert!(convert(1.0, "XYZ", "USD").is_none());
        assert!(rate("usd", "INR").is_none());
    }

    #[test]
    fn test_every_country_currency_is_convertible() {
        for (country, currency) in COUNTRY_CURRENCIES {
            assert!(rate(currency.code, "USD").is_some(), "{}", country);
        }
    }
}
