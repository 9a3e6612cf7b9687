//! Product card rendering for shoe listings.
//!
//! A card is built in two steps: the listing is classified into a
//! [`Variant`](shoe_catalog::Variant), then [`CardRenderer`] turns the listing
//! and its variant into a presentation tree ([`Node`]). The tree can be
//! queried directly or serialized with [`Node::to_html`].
//!
//! ```rust
//! use shoe_card::{render_shoe_card, classes};
//! use shoe_catalog::parse_catalog;
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
//! let card = render_shoe_card(&listings[0]);
//! assert_eq!(card.find_by_class(classes::FLAG).unwrap().text_content(), "Sale");
//! assert!(card.to_html().starts_with(r#"<a class="shoe-card" href="/shoe/tail-twirl""#));
//! ```

mod card;
mod grid;
mod html;
mod theme;
mod tree;

pub use card::{
    classes, render_shoe_card, CardOptions, CardRenderer, StatusFlag, DEFAULT_ROUTE_PREFIX,
};
pub use grid::GRID_CLASS;
pub use html::{html_escape, render_page};
pub use theme::{Color, Weight};
pub use tree::{Element, Node, Style, Tag};
