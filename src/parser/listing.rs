//! Catalog listing page parser
//!
//! A listing page shows a grid of `article.product_pod` cards and, unless it
//! is the last page, an `li.next` pagination link.

use super::{resolve_link, selector, stripped_text};
use crate::model::SummaryRecord;
use scraper::{ElementRef, Html};
use url::Url;

const CARD: &str = "article.product_pod";
const CARD_LINK: &str = "article.product_pod h3 a";
const NEXT_LINK: &str = "li.next a";
const STAR_RATING: &str = "p.star-rating";
const RATING_WORDS: [&str; 5] = ["One", "Two", "Three", "Four", "Five"];

/// Extracts one summary row per catalog card
///
/// Availability is read once from the first `.availability` element on the
/// page and copied onto every row.
///
/// # Example
///
/// ```
/// use folio_crawl::parser::parse_listing;
/// use url::Url;
///
/// let html = r#"<article class="product_pod">
///     <p class="star-rating Three"></p>
///     <h3><a href="book_1/index.html" title="A Book">A Bo...</a></h3>
///     <p class="price_color">£51.77</p>
/// </article>"#;
/// let base = Url::parse("http://books.toscrape.com/catalogue/page-1.html").unwrap();
/// let rows = parse_listing(html, &base);
/// assert_eq!(rows[0].title, "A Book");
/// assert_eq!(rows[0].price, "51.77");
/// assert_eq!(rows[0].rating, "Three");
/// ```
pub fn parse_listing(html: &str, base_url: &Url) -> Vec<SummaryRecord> {
    let document = Html::parse_document(html);

    let Some(card_selector) = selector(CARD) else {
        return Vec::new();
    };

    let availability = page_availability(&document);

    let rows = document
        .select(&card_selector)
        .map(|card| SummaryRecord {
            title: card_title(card),
            price: card_price(card),
            rating: card_rating(card),
            availability: availability.clone(),
            url: card_url(card, base_url),
        })
        .collect();
    rows
}

/// Collects absolute detail-page URLs for every card on a listing page
pub fn extract_book_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let Some(link_selector) = selector(CARD_LINK) else {
        return Vec::new();
    };

    let links = document
        .select(&link_selector)
        .filter_map(|a| resolve_link(a.value().attr("href").unwrap_or(""), base_url))
        .collect();
    links
}

/// Locates the "next page" link, if the page has one
pub fn find_next_page(html: &str, base_url: &Url) -> Option<Url> {
    let document = Html::parse_document(html);
    let next_selector = selector(NEXT_LINK)?;

    let next = document
        .select(&next_selector)
        .find_map(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(href, base_url));
    next
}

fn page_availability(document: &Html) -> String {
    selector(".availability")
        .and_then(|s| document.select(&s).next().map(stripped_text))
        .unwrap_or_default()
}

fn card_link(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let link_selector = selector("h3 a")?;
    card.select(&link_selector).next()
}

fn card_title(card: ElementRef<'_>) -> String {
    match card_link(card) {
        Some(a) => match a.value().attr("title") {
            Some(title) if !title.trim().is_empty() => title.trim().to_string(),
            _ => stripped_text(a),
        },
        None => String::new(),
    }
}

fn card_price(card: ElementRef<'_>) -> String {
    selector("p.price_color")
        .and_then(|s| card.select(&s).next().map(stripped_text))
        .map(|text| strip_currency(&text).to_string())
        .unwrap_or_default()
}

/// Word form of the card's star rating, passed through as-is
fn card_rating(card: ElementRef<'_>) -> String {
    selector(STAR_RATING)
        .and_then(|s| card.select(&s).next())
        .and_then(|p| p.value().classes().find(|c| RATING_WORDS.contains(c)))
        .unwrap_or_default()
        .to_string()
}

fn card_url(card: ElementRef<'_>, base_url: &Url) -> String {
    card_link(card)
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve_link(href, base_url))
        .map(String::from)
        .unwrap_or_default()
}

/// Drops the leading currency symbol (and any mis-decoded prefix such as "Â")
fn strip_currency(text: &str) -> &str {
    text.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
}
