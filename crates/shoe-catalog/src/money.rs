//! Money type for listing prices.
//!
//! Amounts are kept in the smallest unit of the currency (cents for USD) so
//! that catalog prices never pass through floating point before display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of decimal places in the major unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Minor units per major unit (100 for USD, 1 for JPY).
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CatalogError::UnknownCurrency(s.to_string()))
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Check if the amount has no fractional major-unit part.
    pub fn is_whole(&self) -> bool {
        self.amount_cents % self.currency.minor_per_major() == 0
    }

    /// Magnitude split into major and minor units.
    ///
    /// Uses the unsigned magnitude so that `i64::MIN` has a representation.
    pub fn major_minor(&self) -> (u64, u64) {
        let magnitude = self.amount_cents.unsigned_abs();
        let per_major = self.currency.minor_per_major().unsigned_abs();
        (magnitude / per_major, magnitude % per_major)
    }

    /// Format with every decimal place (e.g., "$49.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let sign = if self.is_negative() { "-" } else { "" };
        let (major, minor) = self.major_minor();
        if places == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), major)
        } else {
            format!(
                "{}{}{}.{:0places$}",
                sign,
                self.currency.symbol(),
                major,
                minor
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(-500, Currency::USD).display(), "-$5.00");
        assert_eq!(Money::new(5, Currency::EUR).display(), "\u{20ac}0.05");
    }

    #[test]
    fn test_money_display_extremes() {
        assert_eq!(
            Money::new(i64::MIN, Currency::USD).display(),
            "-$92233720368547758.08"
        );
        assert_eq!(
            Money::new(i64::MAX, Currency::USD).display(),
            "$92233720368547758.07"
        );
    }

    #[test]
    fn test_major_minor() {
        assert_eq!(Money::new(12950, Currency::USD).major_minor(), (129, 50));
        assert_eq!(Money::new(-550, Currency::USD).major_minor(), (5, 50));
        assert_eq!(Money::new(1500, Currency::JPY).major_minor(), (1500, 0));
    }

    #[test]
    fn test_money_is_whole() {
        assert!(Money::new(13000, Currency::USD).is_whole());
        assert!(!Money::new(12950, Currency::USD).is_whole());
        assert!(Money::new(7, Currency::JPY).is_whole());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_currency_from_str_error() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCurrency(ref code) if code == "XYZ"));
    }
}
