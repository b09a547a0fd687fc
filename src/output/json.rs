//! JSON output for detail records

use super::{create_output_file, OutputResult};
use crate::model::DetailRecord;
use std::io::Write;
use std::path::Path;

/// Writes one JSON object per line
pub fn write_ndjson(records: &[DetailRecord], path: &Path) -> OutputResult<()> {
    let mut out = create_output_file(path)?;

    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

/// Writes all records as a single JSON array indented by two spaces
pub fn write_json_array(records: &[DetailRecord], path: &Path) -> OutputResult<()> {
    let mut out = create_output_file(path)?;
    serde_json::to_writer_pretty(&mut out, records)?;
    out.flush()?;
    Ok(())
}

/// Renders records as a compact JSON array string
pub fn to_json_string(records: &[DetailRecord]) -> OutputResult<String> {
    Ok(serde_json::to_string(records)?)
}
