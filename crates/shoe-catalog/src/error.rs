//! Catalog error types.

use thiserror::Error;

/// Errors raised while reading catalog data.
///
/// Classification and rendering never fail; these only surface when a
/// listing is decoded or a configuration value is parsed.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog payload is not valid JSON or does not match the listing shape.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Release date in an unsupported format.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Price that is not a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Recency window length outside the representable range.
    #[error("Invalid recency window: {0} days")]
    InvalidWindow(i64),

    /// Currency code not supported.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Variant name not one of the known tags.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}
