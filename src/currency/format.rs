//! Amount formatting for display

/// Format with thousands separators and two decimals: 1234567.891 -> "1,234,567.89"
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Rounds to zero: no sign on "-0.00"
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// Prefix a formatted amount with a currency symbol
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(-2500.5), "-2,500.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("₹", 27561250.0), "₹27,561,250.00");
        assert_eq!(format_money("", 12.0), "12.00");
    }
}
