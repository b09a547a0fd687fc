//! Configuration module for Folio-Crawl
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! targets the books.toscrape.com demo catalog.
//!
//! # Example
//!
//! ```no_run
//! use folio_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("folio.toml")).unwrap();
//! println!("Crawling from: {}", config.catalog.first_page);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CatalogConfig, Config, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
