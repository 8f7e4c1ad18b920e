//! Currency formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::FormatConfig;

/// Formats amounts as currency strings using the display configuration.
///
/// # Example
///
/// ```
/// use salary_calculator::config::FormatConfig;
/// use salary_calculator::format::CurrencyFormatter;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let formatter = CurrencyFormatter::new(&FormatConfig::default());
/// assert_eq!(formatter.to_currency(Decimal::from_str("1234567.891").unwrap()), "$1,234,567.89");
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    decimal_places: u32,
    symbol: String,
}

impl CurrencyFormatter {
    /// Creates a formatter from the display configuration.
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            decimal_places: config.displayed_decimal_places,
            symbol: config.currency_symbol.clone(),
        }
    }

    /// Formats an amount, rounding midpoint away from zero.
    pub fn to_currency(&self, value: Decimal) -> String {
        let rounded = value
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = rounded.abs().to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        let mut text = format!("{}{}{}", sign, self.symbol, group_thousands(whole));
        if self.decimal_places > 0 {
            // rounding never widens the scale, so pad short fractions
            text.push('.');
            text.push_str(fraction);
            for _ in fraction.len()..self.decimal_places as usize {
                text.push('0');
            }
        }
        text
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn formatter(decimal_places: u32) -> CurrencyFormatter {
        CurrencyFormatter::new(&FormatConfig {
            displayed_decimal_places: decimal_places,
            currency_symbol: "$".to_string(),
        })
    }

    #[test]
    fn test_groups_thousands() {
        let f = formatter(2);
        assert_eq!(f.to_currency(dec("65000")), "$65,000.00");
        assert_eq!(f.to_currency(dec("1234567.5")), "$1,234,567.50");
        assert_eq!(f.to_currency(dec("999")), "$999.00");
        assert_eq!(f.to_currency(dec("100000")), "$100,000.00");
    }

    #[test]
    fn test_rounds_midpoint_away_from_zero() {
        let f = formatter(2);
        assert_eq!(f.to_currency(dec("5639.2694063926940639")), "$5,639.27");
        assert_eq!(f.to_currency(dec("0.125")), "$0.13");
    }

    #[test]
    fn test_negative_sign_before_symbol() {
        let f = formatter(2);
        assert_eq!(f.to_currency(dec("-1234.5")), "-$1,234.50");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        let f = formatter(2);
        assert_eq!(f.to_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_zero_decimal_places() {
        let f = formatter(0);
        assert_eq!(f.to_currency(dec("1188.5")), "$1,189");
    }

    #[test]
    fn test_custom_symbol_and_places() {
        let f = CurrencyFormatter::new(&FormatConfig {
            displayed_decimal_places: 3,
            currency_symbol: "A$".to_string(),
        });
        assert_eq!(f.to_currency(dec("12.3456")), "A$12.346");
    }
}
