//! Render a catalog to HTML.

use anyhow::{Context as _, Result};
use shoe_card::{render_page, CardRenderer};
use shoe_catalog::ShoeListing;

use super::{load_catalog, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let listings = load_catalog(ctx, &args.catalog)?;
    let renderer = CardRenderer::new(ctx.config.card_options()?);

    // JSON mode dumps the presentation tree itself.
    if ctx.output.is_json() {
        ctx.output.json(&renderer.render_grid(&listings))?;
        return Ok(());
    }

    let html = render_html(&renderer, &listings, args.fragment, &args.title);

    match args.output {
        Some(ref output) => {
            let path = ctx.resolve_path(output);
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} card(s) to {}",
                listings.len(),
                path.display()
            ));
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Render the card grid, wrapped in a full page unless `fragment` is set.
fn render_html(
    renderer: &CardRenderer,
    listings: &[ShoeListing],
    fragment: bool,
    title: &str,
) -> String {
    let grid = renderer.render_grid(listings).to_html();
    if fragment {
        grid
    } else {
        render_page(title, &grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shoe_card::{classes, CardOptions, GRID_CLASS};
    use shoe_catalog::{parse_catalog, RecencyWindow};

    fn renderer() -> CardRenderer {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        CardRenderer::new(CardOptions {
            recency: RecencyWindow::last_month().anchored_at(now),
            ..CardOptions::default()
        })
    }

    fn demo_listings() -> Vec<ShoeListing> {
        parse_catalog(include_str!("../../../../demos/shoes.json")).unwrap()
    }

    #[test]
    fn test_fragment_is_bare_grid() {
        let html = render_html(&renderer(), &demo_listings(), true, "Shoes");
        assert!(html.starts_with(&format!(r#"<section class="{}""#, GRID_CLASS)));
        assert!(html.ends_with("</section>"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_page_wraps_grid() {
        let listings = demo_listings();
        let html = render_html(&renderer(), &listings, false, "Spring & Summer");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Spring &amp; Summer</title>"));
        assert!(html.contains(&render_html(&renderer(), &listings, true, "ignored")));
    }

    #[test]
    fn test_empty_catalog_renders_empty_grid() {
        let html = render_html(&renderer(), &[], true, "Shoes");
        assert!(!html.contains(classes::CARD));
        assert!(html.starts_with("<section"));
    }

    #[test]
    fn test_json_tree_dump() {
        let grid = renderer().render_grid(&demo_listings());
        let value = serde_json::to_value(&grid).unwrap();

        assert_eq!(value["kind"], "element");
        assert_eq!(value["tag"], "section");
        assert_eq!(value["class"], GRID_CLASS);
        assert_eq!(value["children"].as_array().unwrap().len(), 4);
        assert_eq!(value["children"][0]["tag"], "a");
        assert_eq!(value["children"][0]["class"], classes::CARD);
    }
}
