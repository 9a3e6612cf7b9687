//! Display helpers for prices and counts.

use crate::money::Money;

/// Format a price for display.
///
/// Whole amounts drop the fractional part (`$130`); anything else keeps the
/// currency's decimal places (`$129.50`).
///
/// ```
/// use shoe_catalog::{format_price, Currency, Money};
/// assert_eq!(format_price(Money::new(13000, Currency::USD)), "$130");
/// assert_eq!(format_price(Money::new(12950, Currency::USD)), "$129.50");
/// ```
pub fn format_price(price: Money) -> String {
    if !price.is_whole() {
        return price.display();
    }

    let sign = if price.is_negative() { "-" } else { "" };
    let (major, _) = price.major_minor();
    format!("{}{}{}", sign, price.currency.symbol(), major)
}

/// Qualify `noun` with `count`, adding an `s` unless the count is exactly one.
///
/// ```
/// use shoe_catalog::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 4), "4 Colors");
/// ```
pub fn pluralize(noun: &str, count: i64) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
