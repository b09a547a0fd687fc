//! Pagination helpers for the two crawl strategies
//!
//! - Bounded enumeration rewrites the `page-N.html` segment of a catalog URL
//!   and walks N upward.
//! - Link-following uses [`LinkTrail`] to remember visited pages so a
//!   self-referential or cyclic "next" link ends the walk.

use crate::FolioError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static PAGE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"page-\d+\.html").unwrap());

/// Substitutes page number `n` into a catalog page URL
///
/// # Example
///
/// ```
/// use folio_crawl::crawler::page_url;
///
/// let url = page_url("http://books.toscrape.com/catalogue/page-1.html", 3).unwrap();
/// assert_eq!(url, "http://books.toscrape.com/catalogue/page-3.html");
/// ```
pub fn page_url(template: &str, n: u32) -> Result<String, FolioError> {
    if !PAGE_SEGMENT.is_match(template) {
        return Err(FolioError::PageTemplate(template.to_string()));
    }

    Ok(PAGE_SEGMENT
        .replace_all(template, format!("page-{}.html", n).as_str())
        .into_owned())
}

/// Number of pages bounded enumeration may visit
///
/// A positive `page_count` is used as given; zero means "until not found",
/// bounded by `safety_cap`.
pub fn page_limit(page_count: u32, safety_cap: u32) -> u32 {
    if page_count > 0 {
        page_count
    } else {
        safety_cap
    }
}

/// Visited-page bookkeeping for the link-following strategy
#[derive(Debug, Default)]
pub struct LinkTrail {
    visited: HashSet<String>,
    pages: u32,
    max_pages: Option<u32>,
}

impl LinkTrail {
    /// Creates a trail; `max_pages` of `None` or `Some(0)` means unlimited
    pub fn new(max_pages: Option<u32>) -> Self {
        Self {
            visited: HashSet::new(),
            pages: 0,
            max_pages: max_pages.filter(|&n| n > 0),
        }
    }

    /// Records a fetched page under both its requested and final URL
    pub fn visit(&mut self, requested: &Url, landed: &Url) {
        self.visited.insert(requested.as_str().to_string());
        self.visited.insert(landed.as_str().to_string());
        self.pages += 1;
    }

    /// Number of pages visited so far
    pub fn pages_visited(&self) -> u32 {
        self.pages
    }

    /// Whether the configured page limit has been reached
    pub fn limit_reached(&self) -> bool {
        self.max_pages
            .is_some_and(|limit| self.pages_visited() >= limit)
    }

    /// Whether following `next` would revisit a page
    pub fn is_revisit(&self, next: &Url) -> bool {
        self.visited.contains(next.as_str())
    }
}
