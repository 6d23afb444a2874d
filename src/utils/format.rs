//! Display formatting helpers
//!
//! Presentation-only: nothing here feeds back into classification or
//! totals computation.

use bigdecimal::BigDecimal;

use crate::types::round_currency;

/// Format an amount for display with a dollar sign and two decimals
pub fn format_currency(amount: &BigDecimal) -> String {
    format!("${}", round_currency(amount))
}

/// Format a stock ratio as a percentage for progress bars
pub fn format_stock_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio.clamp(0.0, 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(
            format_currency(&BigDecimal::from_str("157").unwrap()),
            "$157.00"
        );
        assert_eq!(
            format_currency(&BigDecimal::from_str("12.005").unwrap()),
            "$12.01"
        );
    }

    #[test]
    fn test_format_stock_percent() {
        assert_eq!(format_stock_percent(0.5), "50%");
        assert_eq!(format_stock_percent(1.7), "100%");
        assert_eq!(format_stock_percent(-0.2), "0%");
    }
}
