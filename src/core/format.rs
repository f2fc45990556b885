//! Currency formatting for prices, subtotals and totals.
//!
//! The view never formats numbers itself; it goes through a [`PriceFormatter`]
//! so the currency rules can be swapped (or stubbed in tests).

use serde::Deserialize;

/// Turns a monetary value into its display string.
pub trait PriceFormatter {
    /// Formats `value` as a currency string.
    fn format_price(&self, value: f64) -> String;
}

/// Locale-style currency formatting with a fixed two-digit fraction.
///
/// Deserializable so the `[currency]` table of `config.toml` maps onto it
/// directly. Missing keys fall back to the Brazilian real preset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the number (e.g. `R$`, `$`)
    pub symbol: String,
    /// Separator between the integer part and the cents
    pub decimal_separator: char,
    /// Separator between groups of three integer digits, if any
    pub thousands_separator: Option<char>,
    /// Whether a space goes between the symbol and the number
    pub space_after_symbol: bool,
}

impl CurrencyFormat {
    /// Brazilian real, `R$ 1.234,50`.
    #[must_use]
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: Some('.'),
            space_after_symbol: true,
        }
    }

    /// US dollar, `$1,234.50`.
    #[must_use]
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: Some(','),
            space_after_symbol: false,
        }
    }

    fn prefix(&self) -> String {
        if self.space_after_symbol {
            format!("{} ", self.symbol)
        } else {
            self.symbol.clone()
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        let Some(separator) = self.thousands_separator else {
            return digits.to_string();
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

impl PriceFormatter for CurrencyFormat {
    fn format_price(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{value}", self.prefix());
        }

        // Half away from zero; values beyond i64 cents saturate
        #[allow(clippy::cast_possible_truncation)]
        let cents = (value.abs() * 100.0).round() as i64;
        let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
        let units = self.group_digits(&(cents / 100).to_string());

        format!(
            "{sign}{}{units}{}{:02}",
            self.prefix(),
            self.decimal_separator,
            cents % 100
        )
    }
}
