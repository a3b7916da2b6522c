//! Price parsing and locale currency formatting.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in display math. Price text arrives as the raw
//! server-rendered element content ("1234.5"), gets parsed with
//! leading-prefix semantics, and is re-rendered in the locale convention
//! of the storefront's currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Symbol directly before the amount ("$1,234.50").
    Prefix,
    /// Symbol after the amount, separated by a no-break space
    /// ("1 234,50 ₽").
    Suffix,
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Russian ruble, the storefront default.
    #[default]
    RUB,
    /// United States dollar.
    USD,
    /// Euro.
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Symbol placement in the locale convention of the currency's
    /// primary market.
    pub fn symbol_placement(&self) -> SymbolPlacement {
        match self {
            Currency::USD => SymbolPlacement::Prefix,
            Currency::RUB | Currency::EUR => SymbolPlacement::Suffix,
        }
    }

    /// Thousands separator.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::USD => ',',
            Currency::RUB | Currency::EUR => '\u{a0}',
        }
    }

    /// Decimal separator.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::USD => '.',
            Currency::RUB | Currency::EUR => ',',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (kopecks,
/// cents), avoiding floating-point drift between parse and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest unit.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use enhance_core::money::{Currency, Money};
    /// let price = Money::from_decimal(1234.5, Currency::RUB);
    /// assert_eq!(price.amount_cents, 123450);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format in the currency's locale convention, grouping the integer
    /// part and placing the symbol per [`Currency::symbol_placement`].
    pub fn display(&self) -> String {
        let negative = self.amount_cents < 0;
        let divisor = 10_i64.pow(self.currency.decimal_places());
        let magnitude = self.amount_cents.unsigned_abs();
        let units = magnitude / divisor as u64;
        let fraction = magnitude % divisor as u64;

        let mut amount = group_digits(units, self.currency.group_separator());
        amount.push(self.currency.decimal_separator());
        amount.push_str(&format!(
            "{fraction:0width$}",
            width = self.currency.decimal_places() as usize
        ));
        if negative {
            amount.insert(0, '-');
        }

        match self.currency.symbol_placement() {
            SymbolPlacement::Prefix => format!("{}{}", self.currency.symbol(), amount),
            SymbolPlacement::Suffix => format!("{}\u{a0}{}", amount, self.currency.symbol()),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an unsigned integer into thousands.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Parse the leading decimal prefix of a price text.
///
/// Matches the permissive parse the page relied on: leading whitespace is
/// skipped, an optional sign, digits with an optional fractional part and
/// exponent are consumed, and everything after the numeric prefix is
/// ignored. Text with no leading number yields `None`.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        seen_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return None;
    }

    // Optional exponent; only consumed when complete.
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&b'+') | Some(&b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().ok()
}

/// Localize a raw price text, or `None` when the text has no leading
/// number (the caller leaves such elements untouched).
pub fn localize_price_text(text: &str, currency: Currency) -> Option<String> {
    let amount = parse_price_text(text)?;
    Some(Money::from_decimal(amount, currency).display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(1234.5, Currency::RUB);
        assert_eq!(m.amount_cents, 123450);

        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(123450, Currency::RUB);
        assert!((m.to_decimal() - 1234.5).abs() < 0.001);
    }

    #[test]
    fn test_ruble_display_uses_russian_convention() {
        let m = Money::from_decimal(1234.5, Currency::RUB);
        assert_eq!(m.display(), "1\u{a0}234,50\u{a0}\u{20bd}");
    }

    #[test]
    fn test_display_groups_thousands() {
        let m = Money::new(123_456_789_00, Currency::RUB);
        assert_eq!(m.display(), "123\u{a0}456\u{a0}789,00\u{a0}\u{20bd}");

        let m = Money::new(99900, Currency::RUB);
        assert_eq!(m.display(), "999,00\u{a0}\u{20bd}");
    }

    #[test]
    fn test_dollar_display_uses_us_convention() {
        let m = Money::from_decimal(1234.5, Currency::USD);
        assert_eq!(m.display(), "$1,234.50");
    }

    #[test]
    fn test_negative_display() {
        let m = Money::new(-123450, Currency::RUB);
        assert_eq!(m.display(), "-1\u{a0}234,50\u{a0}\u{20bd}");
    }

    #[test]
    fn test_parse_price_text_plain() {
        assert_eq!(parse_price_text("1234.5"), Some(1234.5));
        assert_eq!(parse_price_text("  42"), Some(42.0));
        assert_eq!(parse_price_text("-3.25"), Some(-3.25));
    }

    #[test]
    fn test_parse_price_text_ignores_trailing_garbage() {
        assert_eq!(parse_price_text("12.5 руб."), Some(12.5));
        assert_eq!(parse_price_text("7items"), Some(7.0));
        assert_eq!(parse_price_text("3."), Some(3.0));
    }

    #[test]
    fn test_parse_price_text_exponent() {
        assert_eq!(parse_price_text("1e3"), Some(1000.0));
        // Incomplete exponent: prefix stops before the 'e'.
        assert_eq!(parse_price_text("1e"), Some(1.0));
    }

    #[test]
    fn test_parse_price_text_rejects_non_numeric() {
        assert_eq!(parse_price_text(""), None);
        assert_eq!(parse_price_text("Бесплатно"), None);
        assert_eq!(parse_price_text("$10"), None);
        assert_eq!(parse_price_text("."), None);
    }

    #[test]
    fn test_localize_price_text() {
        assert_eq!(
            localize_price_text("1234.5", Currency::RUB),
            Some("1\u{a0}234,50\u{a0}\u{20bd}".to_string())
        );
        assert_eq!(localize_price_text("не число", Currency::RUB), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("RUB"), Some(Currency::RUB));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
