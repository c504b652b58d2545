// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Extract product cards from raw catalog HTML.
//!
//! Cards are the `.card-wrapper.product-card-wrapper` elements found on
//! collection pages. Each card is projected into a [`ProductRecord`] with a
//! fixed set of nested selectors; any nested lookup that finds nothing
//! yields `N/A` for that field, so a card never fails on its own.

use super::format::{format_image_url, format_price};
use super::record::{or_na, ProductRecord};
use crate::error::{ScrapeError, ScrapeResult};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const CARD: &str = ".card-wrapper.product-card-wrapper";
const HEADING_LINK: &str = ".card__heading a";
const VENDOR: &str = ".product__vendor";
const SALE_PRICE: &str = ".price-item--sale";
const REGULAR_PRICE: &str = ".price-item--regular";
const BADGE: &str = ".badge";
const IMAGE: &str = "img";

/// Compiled selectors for the product-card markup contract.
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    card: Selector,
    heading_link: Selector,
    vendor: Selector,
    sale_price: Selector,
    regular_price: Selector,
    badge: Selector,
    image: Selector,
}

impl ProductExtractor {
    /// Compile the card selectors.
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            card: compile(CARD)?,
            heading_link: compile(HEADING_LINK)?,
            vendor: compile(VENDOR)?,
            sale_price: compile(SALE_PRICE)?,
            regular_price: compile(REGULAR_PRICE)?,
            badge: compile(BADGE)?,
            image: compile(IMAGE)?,
        })
    }

    /// Extract every product card in document order.
    ///
    /// The HTML5 parser recovers from malformed markup, so this never fails;
    /// a page without cards yields an empty vector.
    pub fn extract(&self, html: &str) -> Vec<ProductRecord> {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(
                recovered = document.errors.len(),
                "HTML parser recovered from malformed markup"
            );
        }

        let products: Vec<ProductRecord> = document
            .select(&self.card)
            .map(|card| self.extract_card(card))
            .collect();

        debug!("extracted {} product cards", products.len());
        products
    }

    fn extract_card(&self, card: ElementRef<'_>) -> ProductRecord {
        let regular = first_text(card, &self.regular_price);
        let sale = first_text(card, &self.sale_price);

        ProductRecord {
            name: or_na(first_text(card, &self.heading_link)),
            vendor: or_na(first_text(card, &self.vendor)),
            price: format_price(&or_na(sale.or_else(|| regular.clone()))),
            original_price: format_price(&or_na(regular)),
            discount: or_na(first_text(card, &self.badge)),
            image: format_image_url(&or_na(first_attr(card, &self.image, "src"))),
            link: or_na(first_attr(card, &self.heading_link, "href")),
        }
    }
}

fn compile(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector {css:?}: {e:?}")))
}

/// Trimmed text of the first descendant matching `selector`.
///
/// Empty text counts as missing.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Raw attribute value of the first descendant matching `selector`.
fn first_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::record::NOT_AVAILABLE;

    fn extract(html: &str) -> Vec<ProductRecord> {
        ProductExtractor::new().unwrap().extract(html)
    }

    const FULL_CARD: &str = r#"
        <div class="card-wrapper product-card-wrapper">
          <div class="card__media"><img src="//cdn.shop.example/files/kettle.jpg?v=3" alt=""></div>
          <h3 class="card__heading"><a href="/products/kettle">  Copper Kettle
          </a></h3>
          <div class="product__vendor"> Hearth &amp; Co </div>
          <span class="badge">Sale</span>
          <span class="price-item price-item--sale">Rs. 1,499.00</span>
          <s class="price-item price-item--regular">$2,000.00</s>
        </div>"#;

    #[test]
    fn test_extract_full_card() {
        let products = extract(&format!("<html><body>{FULL_CARD}</body></html>"));
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.name, "Copper Kettle");
        assert_eq!(p.vendor, "Hearth & Co");
        assert_eq!(p.price, ".1499.00");
        assert_eq!(p.original_price, "2000.00");
        assert_eq!(p.discount, "Sale");
        assert_eq!(p.image, "https://cdn.shop.example/files/kettle.jpg?v=3");
        assert_eq!(p.link, "/products/kettle");
    }

    #[test]
    fn test_no_cards_is_empty() {
        assert!(extract("<html><body><p>Nothing here</p></body></html>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_single_class_does_not_match() {
        let html = r#"<div class="card-wrapper"><h3 class="card__heading"><a href="/x">X</a></h3></div>
                      <div class="product-card-wrapper"></div>"#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_empty_card_is_all_na() {
        let products = extract(r#"<div class="product-card-wrapper card-wrapper"></div>"#);
        assert_eq!(products, vec![ProductRecord::not_available()]);
    }

    #[test]
    fn test_regular_price_feeds_price_when_no_sale() {
        let html = r#"<div class="card-wrapper product-card-wrapper">
            <span class="price-item--regular">$15.50</span></div>"#;
        let p = &extract(html)[0];
        assert_eq!(p.price, "15.50");
        assert_eq!(p.original_price, "15.50");
    }

    #[test]
    fn test_sale_only_leaves_original_price_na() {
        let html = r#"<div class="card-wrapper product-card-wrapper">
            <span class="price-item--sale">$9</span></div>"#;
        let p = &extract(html)[0];
        assert_eq!(p.price, "9");
        assert_eq!(p.original_price, NOT_AVAILABLE);
    }

    #[test]
    fn test_blank_sale_text_falls_back_to_regular() {
        let html = r#"<div class="card-wrapper product-card-wrapper">
            <span class="price-item--sale">   </span>
            <span class="price-item--regular">$30</span></div>"#;
        assert_eq!(extract(html)[0].price, "30");
    }

    #[test]
    fn test_empty_attributes_are_na() {
        let html = r#"<div class="card-wrapper product-card-wrapper">
            <img src=""><h3 class="card__heading"><a>Nameless link</a></h3></div>"#;
        let p = &extract(html)[0];
        assert_eq!(p.name, "Nameless link");
        assert_eq!(p.image, NOT_AVAILABLE);
        assert_eq!(p.link, NOT_AVAILABLE);
    }

    #[test]
    fn test_first_match_wins_and_order_is_preserved() {
        let html = r#"
          <div class="card-wrapper product-card-wrapper">
            <img src="/a1.jpg"><img src="/a2.jpg">
            <h3 class="card__heading"><a href="/a">A</a></h3>
          </div>
          <div class="card-wrapper product-card-wrapper">
            <h3 class="card__heading"><a href="/b">B</a></h3>
          </div>
          <div class="card-wrapper product-card-wrapper">
            <h3 class="card__heading"><a href="/a">A</a></h3>
          </div>"#;
        let products = extract(html);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "A"]);
        assert_eq!(products[0].image, "/a1.jpg");
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let html = r#"<div class="card-wrapper product-card-wrapper"><h3 class="card__heading"><a href="/p">Broken
            <span class="price-item--regular">$5<div><table><tr><td>"#;
        let products = extract(html);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].link, "/p");
        assert_eq!(products[0].original_price, "5");
    }
}
