//! Shoe listing record and catalog decoding.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::recency::RecencyWindow;
use crate::slug::Slug;
use crate::variant::{classify, Variant};

/// A shoe as supplied by the catalog.
///
/// Prices are in the minor unit of the display currency. The record is never
/// validated here: negative color counts and the like pass straight through
/// to the formatting helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: i64,
    /// Present only when the value in the source record is a number.
    #[serde(
        default,
        deserialize_with = "deserialize_sale_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<i64>,
    #[serde(deserialize_with = "deserialize_release_date")]
    pub release_date: DateTime<Utc>,
    pub num_of_colors: i64,
}

impl ShoeListing {
    /// Classify this listing against `recency`.
    pub fn variant(&self, recency: &RecencyWindow) -> Variant {
        classify(self.sale_price, self.release_date, recency)
    }

    /// Base price in `currency`.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Sale price in `currency`, if any.
    pub fn sale_price_in(&self, currency: Currency) -> Option<Money> {
        self.sale_price.map(|cents| Money::new(cents, currency))
    }
}

/// Parse a catalog document.
///
/// Accepts either a bare array of listings or an object with a `shoes` array.
pub fn parse_catalog(json: &str) -> Result<Vec<ShoeListing>, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    let listings = match value {
        Value::Object(mut map) if map.contains_key("shoes") => {
            serde_json::from_value(map.remove("shoes").unwrap_or(Value::Null))?
        }
        other => serde_json::from_value(other)?,
    };
    Ok(listings)
}

/// Parse a release date.
///
/// Supports RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_release_date(raw: &str) -> Result<DateTime<Utc>, CatalogError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CatalogError::InvalidReleaseDate(raw.to_string()))
}

fn release_date_from_value(value: &Value) -> Result<DateTime<Utc>, CatalogError> {
    match value {
        Value::String(raw) => parse_release_date(raw),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .ok_or_else(|| CatalogError::InvalidReleaseDate(n.to_string())),
        other => Err(CatalogError::InvalidReleaseDate(other.to_string())),
    }
}

fn minor_units(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        _ => None,
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    minor_units(&value)
        .ok_or_else(|| serde::de::Error::custom(CatalogError::InvalidPrice(value.to_string())))
}

fn deserialize_sale_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let sale_price = minor_units(&value);
    if sale_price.is_none() && !value.is_null() {
        tracing::warn!(value = %value, "ignoring non-numeric sale price");
    }
    Ok(sale_price)
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    release_date_from_value(&value).map_err(serde::de::Error::custom)
}
