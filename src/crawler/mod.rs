//! Crawler module for catalog page fetching and processing
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching with status classification
//! - Pagination by page-number enumeration or next-link traversal
//! - Coordination of the catalog (detail) and listing (summary) flows

mod coordinator;
mod fetcher;
mod pagination;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_html, fetch_page, FetchResult};
pub use pagination::{page_limit, page_url, LinkTrail};

use crate::config::Config;
use crate::model::{DetailRecord, SummaryRecord};
use crate::output::{write_catalog, write_tsv, OutputFormat};
use crate::FolioError;
use std::path::Path;

/// Runs the catalog flow and optionally saves the records
///
/// This is the main entry point for detail scraping. It will:
/// 1. Enumerate catalog pages and collect book links
/// 2. Fetch and parse every book, skipping failures
/// 3. Write the records to the configured catalog file when `save` is given
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `first_page` - Catalog URL containing a `page-N.html` segment
/// * `page_count` - Pages to visit; 0 walks until a 404 or the safety cap
/// * `save` - Output format to save in, or `None` to skip saving
pub async fn scrape_books(
    config: Config,
    first_page: &str,
    page_count: u32,
    save: Option<OutputFormat>,
) -> Result<Vec<DetailRecord>, FolioError> {
    let coordinator = Coordinator::new(config)?;
    let books = coordinator.scrape_catalog(first_page, page_count).await?;

    if let Some(format) = save {
        let output_path = coordinator.config().output.catalog_path();
        write_catalog(&books, &output_path, format)?;
        tracing::info!("Saved {} books to {}", books.len(), output_path.display());
    }

    Ok(books)
}

/// Runs the listing flow and writes the rows as TSV to `output_path`
pub async fn scrape_listing(
    config: Config,
    start_url: &str,
    max_pages: Option<u32>,
    output_path: &Path,
) -> Result<Vec<SummaryRecord>, FolioError> {
    let coordinator = Coordinator::new(config)?;
    let rows = coordinator.scrape_listing(start_url, max_pages).await?;

    write_tsv(&rows, output_path)?;
    tracing::info!("Saved {} rows to {}", rows.len(), output_path.display());

    Ok(rows)
}
