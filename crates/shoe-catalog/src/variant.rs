//! Display variant of a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::recency::RecencyWindow;

/// One of the three mutually exclusive display classifications of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Listing has a sale price.
    OnSale,
    /// Listing was released inside the recency window.
    NewRelease,
    /// Neither of the above.
    Default,
}

impl Variant {
    /// All variants, in classification priority order.
    pub const ALL: [Variant; 3] = [Variant::OnSale, Variant::NewRelease, Variant::Default];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownVariant(s.to_string()))
    }
}

/// Classify a listing from its sale price and release date.
///
/// First match wins: a sale price makes the listing `on-sale` even when it
/// was also released recently.
pub fn classify(
    sale_price: Option<i64>,
    release_date: DateTime<Utc>,
    recency: &RecencyWindow,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if recency.is_new(release_date) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}
