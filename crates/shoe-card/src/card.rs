//! Shoe card renderer.

use shoe_catalog::{format_price, pluralize, Currency, Money, RecencyWindow, ShoeListing, Variant};

use crate::theme::{Color, Weight};
use crate::tree::{Element, Node, Style, Tag};

/// Default path prefix for card links.
pub const DEFAULT_ROUTE_PREFIX: &str = "/shoe";

/// Vertical gap between the image and the text rows, in pixels.
const IMAGE_SPACING: u32 = 12;

/// Class names of the card parts.
pub mod classes {
    pub const CARD: &str = "shoe-card";
    pub const WRAPPER: &str = "shoe-card__wrapper";
    pub const FLAG: &str = "shoe-card__flag";
    pub const IMAGE_WRAPPER: &str = "shoe-card__image-wrapper";
    pub const IMAGE: &str = "shoe-card__image";
    pub const SPACER: &str = "spacer";
    pub const ROW: &str = "shoe-card__row";
    pub const NAME: &str = "shoe-card__name";
    pub const PRICE: &str = "shoe-card__price";
    pub const SALE_PRICE: &str = "shoe-card__sale-price";
    pub const COLOR_INFO: &str = "shoe-card__color-info";
}

/// Status flag shown in the card corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlag {
    pub label: &'static str,
    pub background: Color,
}

impl StatusFlag {
    /// Flag for `variant`, or `None` when the card carries no flag.
    pub fn for_variant(variant: Variant) -> Option<Self> {
        match variant {
            Variant::OnSale => Some(Self {
                label: "Sale",
                background: Color::Primary,
            }),
            Variant::NewRelease => Some(Self {
                label: "Just Released!",
                background: Color::Secondary,
            }),
            Variant::Default => None,
        }
    }
}

/// Settings shared by every card a renderer produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Currency listing prices are denominated in.
    pub currency: Currency,
    /// Prefix of the navigation target; the slug is appended.
    pub route_prefix: String,
    /// Window deciding `new-release`.
    pub recency: RecencyWindow,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            recency: RecencyWindow::last_month(),
        }
    }
}

/// Renders listings into card presentation trees.
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    options: CardOptions,
}

impl CardRenderer {
    pub fn new(options: CardOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Classify `listing` with this renderer's recency window.
    pub fn classify(&self, listing: &ShoeListing) -> Variant {
        listing.variant(&self.options.recency)
    }

    /// Render one listing.
    pub fn render(&self, listing: &ShoeListing) -> Node {
        let variant = self.classify(listing);
        self.render_variant(listing, variant)
    }

    /// Render one listing with an already classified variant.
    pub fn render_variant(&self, listing: &ShoeListing, variant: Variant) -> Node {
        tracing::debug!(slug = %listing.slug, %variant, "rendering shoe card");

        let currency = self.options.currency;
        let base_price = listing.price_in(currency);

        // The base price is struck only when a sale price is shown beside it.
        let (price, sale_price) = match (variant, listing.sale_price_in(currency)) {
            (Variant::OnSale, Some(sale)) => {
                (struck_price(base_price), Some(emphasized_price(sale)))
            }
            (Variant::OnSale, None) | (Variant::NewRelease | Variant::Default, _) => {
                (plain_price(base_price), None)
            }
        };

        let wrapper = Element::new(Tag::Article)
            .class(classes::WRAPPER)
            .attr("data-variant", variant.as_str())
            .style(Style::new().set("position", "relative"))
            .child_opt(StatusFlag::for_variant(variant).map(flag))
            .child(image(&listing.image_src))
            .child(spacer(IMAGE_SPACING))
            .child(row().child(name(&listing.name)).child(price))
            .child(
                row()
                    .child(color_info(listing.num_of_colors))
                    .child_opt(sale_price),
            );

        Element::new(Tag::A)
            .class(classes::CARD)
            .attr("href", listing.slug.href(&self.options.route_prefix))
            .style(
                Style::new()
                    .set("text-decoration", "none")
                    .set("color", "inherit")
                    .set("flex", 1)
                    .set("flex-basis", "340px"),
            )
            .child(wrapper)
            .into()
    }
}

/// Render `listing` with default options.
pub fn render_shoe_card(listing: &ShoeListing) -> Node {
    CardRenderer::default().render(listing)
}

fn flag(flag: StatusFlag) -> Element {
    Element::new(Tag::Div)
        .class(classes::FLAG)
        .style(
            Style::new()
                .set("position", "absolute")
                .set("right", "-4px")
                .set("top", "12px")
                .set("padding", "8px")
                .set("background-color", flag.background)
                .set("color", Color::White)
                .set("font-weight", 700)
                .set("border-radius", "2px")
                .set("z-index", 1000),
        )
        .text(flag.label)
}

fn image(src: &str) -> Element {
    Element::new(Tag::Div)
        .class(classes::IMAGE_WRAPPER)
        .style(Style::new().set("position", "relative"))
        .child(
            Element::new(Tag::Img)
                .class(classes::IMAGE)
                .attr("alt", "")
                .attr("src", src)
                .style(Style::new().set("width", "100%")),
        )
}

fn spacer(size: u32) -> Element {
    let px = format!("{}px", size);
    Element::new(Tag::Div).class(classes::SPACER).style(
        Style::new()
            .set("display", "block")
            .set("width", &px)
            .set("min-width", &px)
            .set("height", &px)
            .set("min-height", &px),
    )
}

fn row() -> Element {
    Element::new(Tag::Div).class(classes::ROW).style(
        Style::new()
            .set("font-size", "1rem")
            .set("display", "flex")
            .set("justify-content", "space-between"),
    )
}

fn name(name: &str) -> Element {
    Element::new(Tag::H3)
        .class(classes::NAME)
        .style(
            Style::new()
                .set("font-weight", Weight::Medium)
                .set("color", Color::Gray900),
        )
        .text(name)
}

fn plain_price(price: Money) -> Element {
    Element::new(Tag::Span)
        .class(classes::PRICE)
        .text(format_price(price))
}

fn struck_price(price: Money) -> Element {
    plain_price(price).style(
        Style::new()
            .set("text-decoration", "line-through")
            .set("color", Color::Gray700),
    )
}

fn emphasized_price(price: Money) -> Element {
    Element::new(Tag::Span)
        .class(classes::SALE_PRICE)
        .style(
            Style::new()
                .set("font-weight", Weight::Medium)
                .set("color", Color::Primary),
        )
        .text(format_price(price))
}

fn color_info(count: i64) -> Element {
    Element::new(Tag::P)
        .class(classes::COLOR_INFO)
        .style(Style::new().set("color", Color::Gray700))
        .text(pluralize("Color", count))
}
