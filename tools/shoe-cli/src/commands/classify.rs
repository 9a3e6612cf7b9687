//! Print the variant of every listing in a catalog.

use anyhow::Result;
use serde::Serialize;
use shoe_card::{CardRenderer, StatusFlag};
use shoe_catalog::{format_price, ShoeListing, Variant};

use super::{load_catalog, ClassifyArgs};
use crate::context::Context;
use crate::output::variant_badge;

/// One row of classify output.
#[derive(Debug, Serialize)]
struct Classification {
    slug: String,
    variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    flag: Option<&'static str>,
    price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sale_price: Option<String>,
}

impl Classification {
    fn new(renderer: &CardRenderer, listing: &ShoeListing) -> Self {
        let currency = renderer.options().currency;
        let variant = renderer.classify(listing);
        Self {
            slug: listing.slug.to_string(),
            variant,
            flag: StatusFlag::for_variant(variant).map(|flag| flag.label),
            price: format_price(listing.price_in(currency)),
            sale_price: listing.sale_price_in(currency).map(format_price),
        }
    }
}

/// Run the classify command.
pub fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let listings = load_catalog(ctx, &args.catalog)?;
    let renderer = CardRenderer::new(ctx.config.card_options()?);

    let rows = classify_rows(&renderer, &listings);

    if ctx.output.is_json() {
        ctx.output.json(&rows)?;
        return Ok(());
    }

    ctx.output.header("Listing variants");

    let widths = [28, 11, 16, 10, 10];
    ctx.output
        .table_row(&["SLUG", "VARIANT", "FLAG", "PRICE", "SALE"], &widths);
    for row in &rows {
        ctx.output.table_row(
            &[
                &row.slug,
                row.variant.as_str(),
                row.flag.unwrap_or("-"),
                &row.price,
                row.sale_price.as_deref().unwrap_or("-"),
            ],
            &widths,
        );
    }

    if ctx.output.is_verbose() {
        for (variant, count) in variant_counts(&rows) {
            ctx.output.kv(&variant_badge(variant.as_str()), &count.to_string());
        }
    }

    Ok(())
}

fn classify_rows(renderer: &CardRenderer, listings: &[ShoeListing]) -> Vec<Classification> {
    listings
        .iter()
        .map(|listing| Classification::new(renderer, listing))
        .collect()
}

/// Number of rows per variant, in priority order.
fn variant_counts(rows: &[Classification]) -> Vec<(Variant, usize)> {
    Variant::ALL
        .into_iter()
        .map(|variant| {
            let count = rows.iter().filter(|row| row.variant == variant).count();
            (variant, count)
        })
        .collect()
}
