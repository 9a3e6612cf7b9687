//! End-to-end card rendering over catalog records.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use shoe_card::{classes, CardOptions, CardRenderer, Color, Node};
use shoe_catalog::{format_price, parse_catalog, Currency, Money, RecencyWindow, ShoeListing, Variant};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn renderer() -> CardRenderer {
    CardRenderer::new(CardOptions {
        recency: RecencyWindow::last_month().anchored_at(now()),
        ..CardOptions::default()
    })
}

fn listing(price: i64, sale_price: Value, release_date: Value) -> ShoeListing {
    let doc = json!([{
        "slug": "scenario",
        "name": "Scenario Shoe",
        "imageSrc": "/assets/scenario.jpg",
        "price": price,
        "salePrice": sale_price,
        "releaseDate": release_date,
        "numOfColors": 4
    }]);
    parse_catalog(&doc.to_string()).unwrap().remove(0)
}

fn days_ago(days: i64) -> Value {
    json!((now() - Duration::days(days)).to_rfc3339())
}

fn flag_text(card: &Node) -> Option<String> {
    card.find_by_class(classes::FLAG).map(|el| el.text_content())
}

fn price_texts(card: &Node) -> Vec<String> {
    let mut prices: Vec<String> = card
        .find_all_by_class(classes::PRICE)
        .into_iter()
        .map(|el| el.text_content())
        .collect();
    prices.extend(
        card.find_all_by_class(classes::SALE_PRICE)
            .into_iter()
            .map(|el| el.text_content()),
    );
    prices
}

#[test]
fn on_sale_scenario() {
    let shoe = listing(13000, json!(11000), json!("2020-01-01"));
    let renderer = renderer();
    assert_eq!(renderer.classify(&shoe), Variant::OnSale);

    let card = renderer.render(&shoe);
    assert_eq!(flag_text(&card).as_deref(), Some("Sale"));
    assert_eq!(price_texts(&card), vec!["$130", "$110"]);

    let struck = card.find_by_class(classes::PRICE).unwrap();
    assert_eq!(struck.style.get("text-decoration"), Some("line-through"));
    let flag = card.find_by_class(classes::FLAG).unwrap();
    assert_eq!(flag.style.get("background-color"), Some(Color::Primary.css()));
}

#[test]
fn new_release_scenario() {
    let shoe = listing(15000, json!(null), days_ago(14));
    let card = renderer().render(&shoe);

    assert_eq!(renderer().classify(&shoe), Variant::NewRelease);
    assert_eq!(flag_text(&card).as_deref(), Some("Just Released!"));
    assert_eq!(price_texts(&card), vec!["$150"]);

    let flag = card.find_by_class(classes::FLAG).unwrap();
    assert_eq!(flag.style.get("background-color"), Some(Color::Secondary.css()));
}

#[test]
fn default_scenario() {
    let shoe = listing(8000, json!(null), json!("2019-01-01"));
    let card = renderer().render(&shoe);

    assert_eq!(renderer().classify(&shoe), Variant::Default);
    assert_eq!(flag_text(&card), None);
    assert_eq!(price_texts(&card), vec!["$80"]);
}

#[test]
fn sale_beats_recent_release_scenario() {
    let shoe = listing(12000, json!(9000), days_ago(2));
    let card = renderer().render(&shoe);

    assert_eq!(renderer().classify(&shoe), Variant::OnSale);
    assert_eq!(flag_text(&card).as_deref(), Some("Sale"));
    assert_eq!(price_texts(&card), vec!["$120", "$90"]);
}

#[test]
fn rendering_is_idempotent() {
    let renderer = renderer();
    for shoe in [
        listing(13000, json!(11000), json!("2020-01-01")),
        listing(15000, json!(null), days_ago(14)),
        listing(8000, json!(null), json!("2019-01-01")),
    ] {
        let first = renderer.render(&shoe);
        let second = renderer.render(&shoe);
        assert_eq!(first, second);
        assert_eq!(first.to_html(), second.to_html());
    }
}

#[test]
fn secondary_price_present_exactly_when_on_sale() {
    let renderer = renderer();
    let cases = [
        listing(13000, json!(11050), json!("2020-01-01")),
        listing(13000, json!("11050"), json!("2020-01-01")),
        listing(13000, json!(null), days_ago(3)),
        listing(13000, json!(0), days_ago(3)),
    ];

    for shoe in cases {
        let variant = renderer.classify(&shoe);
        let card = renderer.render(&shoe);
        let sale = card.find_by_class(classes::SALE_PRICE);

        match variant {
            Variant::OnSale => {
                let expected = format_price(Money::new(shoe.sale_price.unwrap(), Currency::USD));
                assert_eq!(sale.unwrap().text_content(), expected);
            }
            Variant::NewRelease | Variant::Default => assert!(sale.is_none()),
        }
    }
}

#[test]
fn currency_option_applies_to_both_prices() {
    let renderer = CardRenderer::new(CardOptions {
        currency: Currency::EUR,
        ..renderer().options().clone()
    });
    let card = renderer.render(&listing(12950, json!(9900), json!("2020-01-01")));
    assert_eq!(price_texts(&card), vec!["\u{20ac}129.50", "\u{20ac}99"]);
}

#[test]
fn html_output_for_on_sale_card() {
    let card = renderer().render(&listing(13000, json!(11000), json!("2020-01-01")));
    let html = card.to_html();

    assert!(html.starts_with(r#"<a class="shoe-card" href="/shoe/scenario""#));
    assert!(html.contains(r#"data-variant="on-sale""#));
    assert!(html.contains(">Sale</div>"));
    assert!(html.contains(r#"<img class="shoe-card__image" alt="" src="/assets/scenario.jpg""#));
    assert!(html.contains(">4 Colors</p>"));
    assert!(html.ends_with("</article></a>"));
}

#[test]
fn demo_catalog_renders_every_variant() {
    let listings = parse_catalog(include_str!("../../../demos/shoes.json")).unwrap();
    let renderer = renderer();

    let variants: Vec<Variant> = listings.iter().map(|l| renderer.classify(l)).collect();
    assert_eq!(
        variants,
        vec![Variant::OnSale, Variant::NewRelease, Variant::Default, Variant::OnSale]
    );

    let grid = renderer.render_grid(&listings);
    assert_eq!(grid.find_all_by_class(classes::CARD).len(), 4);
    assert_eq!(grid.find_all_by_class(classes::FLAG).len(), 3);
    assert_eq!(grid.find_all_by_class(classes::SALE_PRICE).len(), 2);
}

#[test]
fn extreme_prices_render_without_panicking() {
    let shoe = listing(i64::MIN, json!(i64::MIN), json!("2020-01-01"));
    let card = renderer().render(&shoe);
    assert_eq!(
        price_texts(&card),
        vec!["-$92233720368547758.08", "-$92233720368547758.08"]
    );
}
