//! Grid of cards for a listing page.

use shoe_catalog::ShoeListing;

use crate::card::CardRenderer;
use crate::tree::{Element, Node, Style, Tag};

pub const GRID_CLASS: &str = "shoe-grid";

impl CardRenderer {
    /// Render every listing as a card inside a wrapping flex grid.
    pub fn render_grid(&self, listings: &[ShoeListing]) -> Node {
        tracing::debug!(count = listings.len(), "rendering shoe grid");

        listings
            .iter()
            .fold(
                Element::new(Tag::Section).class(GRID_CLASS).style(
                    Style::new()
                        .set("display", "flex")
                        .set("flex-wrap", "wrap")
                        .set("gap", "32px"),
                ),
                |grid, listing| grid.child(self.render(listing)),
            )
            .into()
    }
}
