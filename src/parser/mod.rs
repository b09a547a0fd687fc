//! HTML parsers for catalog listing pages and book detail pages
//!
//! Parsing never fails: structural mismatches leave the affected field empty
//! (or absent) rather than rejecting the whole record.

mod detail;
mod listing;

pub use detail::{normalize_book_url, parse_detail, parse_price, rating_digit};
pub use listing::{extract_book_links, find_next_page, parse_listing};

use scraper::{ElementRef, Selector};
use url::Url;

/// Parses a CSS selector, returning `None` for an invalid one
fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Text content of an element with each text node trimmed and empty nodes
/// dropped, concatenated without separators
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Resolves a link href to an absolute http(s) URL
///
/// Returns None for empty hrefs, fragment-only links, and anything that does
/// not resolve to an http(s) URL.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        _ => None,
    }
}
