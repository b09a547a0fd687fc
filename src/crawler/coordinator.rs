//! Crawler coordinator - the two crawl flows
//!
//! - Catalog flow: enumerate `page-N.html` listing pages, collect every book
//!   link, then fetch and parse each detail page. A failing book is skipped.
//! - Listing flow: follow "next" links from a start page, emitting one summary
//!   row per card. Any fetch error aborts the run.
//!
//! Both flows are strictly sequential: one request in flight at a time.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_html, fetch_page, FetchResult};
use crate::crawler::pagination::{page_limit, page_url, LinkTrail};
use crate::model::{DetailRecord, SummaryRecord};
use crate::parser::{
    extract_book_links, find_next_page, normalize_book_url, parse_detail, parse_listing,
};
use crate::FolioError;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    base_url: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(FolioError)` - The base URL is invalid or the client failed to build
    pub fn new(config: Config) -> Result<Self, FolioError> {
        let base_url = Url::parse(&config.catalog.base_url)?;
        let client = build_http_client(&config.http)?;

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    /// Returns the configuration this coordinator was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches and parses a single book detail page
    ///
    /// Scheme-less URLs are resolved against the catalog base URL. Any HTTP
    /// error, including 404, is returned to the caller.
    pub async fn get_book_data(&self, book_url: &str) -> Result<DetailRecord, FolioError> {
        let url = normalize_book_url(book_url, &self.base_url)?;
        let (_, body) = fetch_html(&self.client, url.as_str()).await?;
        Ok(parse_detail(&body, &url))
    }

    /// Collects book detail URLs from enumerated catalog pages
    ///
    /// Visits `page-1.html` through `page-{limit}.html`, where the limit is
    /// `page_count` or, when that is zero, the configured safety cap. Stops
    /// early at the first page answering 404.
    pub async fn collect_book_urls(
        &self,
        first_page: &str,
        page_count: u32,
    ) -> Result<Vec<Url>, FolioError> {
        let limit = page_limit(page_count, self.config.catalog.safety_cap);
        let mut urls = Vec::new();

        for page in 1..=limit {
            let url = page_url(first_page, page)?;

            match fetch_page(&self.client, &url).await? {
                FetchResult::NotFound => {
                    tracing::info!("Page {} returned 404, stopping", page);
                    break;
                }
                FetchResult::Success {
                    final_url,
                    status_code,
                    body,
                } => {
                    let base = Url::parse(&final_url)?;
                    let links = extract_book_links(&body, &base);
                    tracing::info!(
                        "Collected {} links from page {} (status {})",
                        links.len(),
                        page,
                        status_code
                    );
                    urls.extend(links);
                }
            }
        }

        Ok(urls)
    }

    /// Runs the catalog flow and returns one record per book that parsed
    ///
    /// # Arguments
    ///
    /// * `first_page` - Catalog URL containing a `page-N.html` segment
    /// * `page_count` - Pages to visit; 0 walks until a 404 or the safety cap
    pub async fn scrape_catalog(
        &self,
        first_page: &str,
        page_count: u32,
    ) -> Result<Vec<DetailRecord>, FolioError> {
        let started = Instant::now();
        let urls = self.collect_book_urls(first_page, page_count).await?;

        tracing::info!(
            "Link collection took {:.2}s, found {} book URLs",
            started.elapsed().as_secs_f64(),
            urls.len()
        );

        let started = Instant::now();
        let mut books = Vec::with_capacity(urls.len());

        for url in &urls {
            match self.get_book_data(url.as_str()).await {
                Ok(record) => books.push(record),
                Err(e) => tracing::warn!("Skipping {}: {}", url, e),
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            tracing::info!(
                "Parsed {} of {} books in {:.2}s ({:.2} books/s)",
                books.len(),
                urls.len(),
                elapsed,
                books.len() as f64 / elapsed
            );
        }

        Ok(books)
    }

    /// Runs the listing flow by following "next" links from `start_url`
    ///
    /// Stops when a page has no next link, when `max_pages` pages have been
    /// read, or when the next link (or the page it redirects to) is an already
    /// visited page. Sleeps for the configured page delay between page fetches.
    pub async fn scrape_listing(
        &self,
        start_url: &str,
        max_pages: Option<u32>,
    ) -> Result<Vec<SummaryRecord>, FolioError> {
        let delay = self.config.catalog.page_delay();
        let mut trail = LinkTrail::new(max_pages);
        let mut rows = Vec::new();
        let mut current = Url::parse(start_url)?;

        loop {
            let (final_url, body) = fetch_html(&self.client, current.as_str()).await?;
            let base = Url::parse(&final_url)?;

            if base != current && trail.is_revisit(&base) {
                tracing::warn!(
                    "{} redirected to already visited {}, stopping",
                    current,
                    base
                );
                break;
            }
            trail.visit(&current, &base);

            let page_rows = parse_listing(&body, &base);
            tracing::info!(
                "Page {}: {} rows from {}",
                trail.pages_visited(),
                page_rows.len(),
                current
            );
            rows.extend(page_rows);

            if trail.limit_reached() {
                tracing::info!("Reached page limit, stopping");
                break;
            }

            let Some(next) = find_next_page(&body, &base) else {
                tracing::info!("No next page link, stopping");
                break;
            };

            if trail.is_revisit(&next) {
                tracing::warn!("Next link {} was already visited, stopping", next);
                break;
            }

            tokio::time::sleep(delay).await;
            current = next;
        }

        Ok(rows)
    }
}
