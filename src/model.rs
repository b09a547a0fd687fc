//! Record shapes produced by the two crawl flows
//!
//! The listing flow yields flat [`SummaryRecord`]s, one per catalog card. The
//! catalog flow yields [`DetailRecord`]s, one per book detail page. The two are
//! kept apart on purpose: their field sets differ.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column names for the tab-separated listing output, in order
pub const SUMMARY_HEADER: [&str; 5] = ["title", "price", "rating", "availability", "url"];

/// One row scraped from a catalog listing card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Book title (from the link's title attribute or its text)
    pub title: String,

    /// Price text with the currency symbol stripped
    pub price: String,

    /// Star rating in word form ("One".."Five"), or empty
    pub rating: String,

    /// Availability text, read once per listing page
    pub availability: String,

    /// Absolute URL of the book's detail page
    pub url: String,
}

impl SummaryRecord {
    /// Returns the record's fields in [`SUMMARY_HEADER`] order
    pub fn to_row(&self) -> [&str; 5] {
        [
            &self.title,
            &self.price,
            &self.rating,
            &self.availability,
            &self.url,
        ]
    }
}

/// Full record scraped from a single book detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub title: String,

    /// Parsed numeric price; `None` when `price_text` has no usable number
    pub price: Option<f64>,

    /// Raw price string including the currency symbol
    pub price_text: String,

    /// Star rating as a single digit "1".."5", or empty
    pub rating: String,

    pub availability: String,

    pub description: String,

    /// Rows of the product information table, keyed by label
    pub product_info: BTreeMap<String, String>,

    /// Absolute URL the record was scraped from
    #[serde(rename = "_source_url", default)]
    pub source_url: String,
}
