//! Book detail page parser

use super::{selector, stripped_text};
use crate::model::DetailRecord;
use scraper::Html;
use std::collections::BTreeMap;
use url::Url;

const PRICE_INCL_TAX: &str = "Price (incl. tax)";
const PRICE_EXCL_TAX: &str = "Price (excl. tax)";
const AVAILABILITY: &str = "Availability";

/// Maps a star-rating class token to its digit
///
/// ```
/// use folio_crawl::parser::rating_digit;
///
/// assert_eq!(rating_digit("Four"), Some("4"));
/// assert_eq!(rating_digit("four"), None);
/// ```
pub fn rating_digit(word: &str) -> Option<&'static str> {
    match word {
        "One" => Some("1"),
        "Two" => Some("2"),
        "Three" => Some("3"),
        "Four" => Some("4"),
        "Five" => Some("5"),
        _ => None,
    }
}

/// Extracts a number from a money string
///
/// Every character other than ASCII digits, `.` and `-` is discarded before
/// conversion. Returns `None` when nothing convertible remains.
///
/// ```
/// use folio_crawl::parser::parse_price;
///
/// assert_eq!(parse_price("£51.77"), Some(51.77));
/// assert_eq!(parse_price("1,299.00"), Some(1299.0));
/// assert_eq!(parse_price(""), None);
/// ```
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}

/// Makes a book URL absolute, joining scheme-less input onto `base_url`
pub fn normalize_book_url(url: &str, base_url: &Url) -> Result<Url, url::ParseError> {
    match Url::parse(url) {
        Ok(absolute) => Ok(absolute),
        Err(url::ParseError::RelativeUrlWithoutBase) => base_url.join(url),
        Err(e) => Err(e),
    }
}

/// Builds a full record from a book detail page
///
/// Missing elements leave their field empty; the record is always produced.
pub fn parse_detail(html: &str, source_url: &Url) -> DetailRecord {
    let document = Html::parse_document(html);

    let product_info = product_table(&document);

    let price_text = [PRICE_INCL_TAX, PRICE_EXCL_TAX]
        .iter()
        .filter_map(|key| product_info.get(*key))
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_default();
    let price = parse_price(&price_text);

    DetailRecord {
        title: first_text(&document, ".product_main h1"),
        price,
        price_text,
        rating: detail_rating(&document),
        availability: product_info.get(AVAILABILITY).cloned().unwrap_or_default(),
        description: first_text(&document, "#product_description ~ p"),
        product_info,
        source_url: source_url.to_string(),
    }
}

fn first_text(document: &Html, css: &str) -> String {
    selector(css)
        .and_then(|s| document.select(&s).next().map(stripped_text))
        .unwrap_or_default()
}

fn detail_rating(document: &Html) -> String {
    selector(".product_main p.star-rating")
        .and_then(|s| document.select(&s).next())
        .and_then(|p| p.value().classes().find_map(rating_digit))
        .unwrap_or_default()
        .to_string()
}

/// Reads every table row that has both a label and a value cell
fn product_table(document: &Html) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();

    let (Some(rows), Some(th), Some(td)) = (
        selector("table.table.table-striped tr"),
        selector("th"),
        selector("td"),
    ) else {
        return info;
    };

    for row in document.select(&rows) {
        let label = row.select(&th).next();
        let value = row.select(&td).next();

        if let (Some(label), Some(value)) = (label, value) {
            info.insert(stripped_text(label), stripped_text(value));
        }
    }

    info
}
