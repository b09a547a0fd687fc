//! Folio-Crawl: a book catalog scraper
//!
//! This crate walks a paginated book catalog, extracts summary rows from the
//! listing pages or full records from each book's detail page, and writes the
//! results as TSV, newline-delimited JSON, or a JSON array.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod parser;

use thiserror::Error;

/// Main error type for Folio-Crawl operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Page URL '{0}' has no page-N.html segment to enumerate")]
    PageTemplate(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Folio-Crawl operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Coordinator;
pub use model::{DetailRecord, SummaryRecord};
