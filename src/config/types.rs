use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Folio-Crawl
///
/// Every section and key is optional; missing values fall back to the
/// defaults for the books.toscrape.com demo catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Catalog location and pagination limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog root; scheme-less book URLs are resolved against it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First catalog page, containing a `page-N.html` segment
    #[serde(rename = "first-page")]
    pub first_page: String,

    /// Upper bound on enumerated pages when no page count is given
    #[serde(rename = "safety-cap")]
    pub safety_cap: u32,

    /// Delay between pages in the link-following flow (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,
}

impl CatalogConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://books.toscrape.com/".to_string(),
            first_page: "http://books.toscrape.com/catalogue/page-1.html".to_string(),
            safety_cap: 50,
            page_delay_ms: 1000,
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory all output files are written into
    pub directory: String,

    /// File name for detail records (NDJSON or JSON array)
    #[serde(rename = "catalog-file")]
    pub catalog_file: String,

    /// File name for tab-separated listing rows
    #[serde(rename = "listing-file")]
    pub listing_file: String,
}

impl OutputConfig {
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.catalog_file)
    }

    pub fn listing_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.listing_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "artifacts".to_string(),
            catalog_file: "books_data.txt".to_string(),
            listing_file: "books.tsv".to_string(),
        }
    }
}
