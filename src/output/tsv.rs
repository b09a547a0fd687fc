//! Tab-separated output for listing rows

use super::{create_output_file, OutputResult};
use crate::model::{SummaryRecord, SUMMARY_HEADER};
use std::io::{self, Write};
use std::path::Path;

const SEP: char = '\t';

/// Writes summary rows as TSV with a `title\tprice\trating\tavailability\turl`
/// header
pub fn write_tsv(records: &[SummaryRecord], path: &Path) -> OutputResult<()> {
    let mut out = create_output_file(path)?;

    write_row(&mut out, &SUMMARY_HEADER)?;
    for record in records {
        write_row(&mut out, &record.to_row())?;
    }

    out.flush()?;
    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", SEP)?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
