//! Output module for saving scraped records
//!
//! This module handles:
//! - Tab-separated rows for the listing flow
//! - Newline-delimited JSON or a JSON array for the catalog flow
//!
//! Every writer replaces the destination file and creates missing parent
//! directories.

mod json;
mod tsv;

pub use json::{to_json_string, write_json_array, write_ndjson};
pub use tsv::write_tsv;

use crate::model::DetailRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// File format for detail records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    NdJson,
    /// A single pretty-printed JSON array
    JsonArray,
}

/// Writes detail records in the requested format
pub fn write_catalog(
    records: &[DetailRecord],
    path: &Path,
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::NdJson => write_ndjson(records, path),
        OutputFormat::JsonArray => write_json_array(records, path),
    }
}

/// Creates parent directories and opens `path` for writing, truncating it
fn create_output_file(path: &Path) -> OutputResult<BufWriter<File>> {
    let wrap = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let file = File::create(path).map_err(wrap)?;
    Ok(BufWriter::new(file))
}
