//! Shoe listing domain types for the Shoefront catalog.
//!
//! This crate provides:
//!
//! - **Listings**: [`ShoeListing`] records and catalog JSON decoding
//! - **Variants**: the `on-sale` / `new-release` / `default` classification
//! - **Formatting**: [`format_price`] and [`pluralize`] for card labels
//! - **Recency**: the "released in the last month" window
//!
//! # Example
//!
//! ```rust
//! use shoe_catalog::prelude::*;
//!
//! let listings = parse_catalog(r#"[{
//!     "slug": "tail-twirl",
//!     "name": "Tail Twirl",
//!     "imageSrc": "/assets/tail-twirl.jpg",
//!     "price": 13000,
//!     "salePrice": 11000,
//!     "releaseDate": "2020-01-01",
//!     "numOfColors": 3
//! }]"#).unwrap();
//!
//! let variant = listings[0].variant(&RecencyWindow::last_month());
//! assert_eq!(variant, Variant::OnSale);
//! ```

pub mod error;
pub mod format;
pub mod listing;
pub mod money;
pub mod recency;
pub mod slug;
pub mod variant;

pub use error::CatalogError;
pub use format::{format_price, pluralize};
pub use listing::{parse_catalog, parse_release_date, ShoeListing};
pub use money::{Currency, Money};
pub use recency::{is_new_shoe, RecencyWindow, DEFAULT_WINDOW_DAYS};
pub use slug::Slug;
pub use variant::{classify, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::format::{format_price, pluralize};
    pub use crate::listing::{parse_catalog, ShoeListing};
    pub use crate::money::{Currency, Money};
    pub use crate::recency::{is_new_shoe, RecencyWindow};
    pub use crate::slug::Slug;
    pub use crate::variant::{classify, Variant};
}
