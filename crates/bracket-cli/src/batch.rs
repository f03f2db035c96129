// File: crates/bracket-cli/src/batch.rs
// Summary: Load spacing requests from a CSV file with flexible headers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bracket_core::SpacingRequest;
use tracing::{debug, warn};

/// One parsed batch row; `row` is 1-based and counts data rows only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchRow {
    pub row: usize,
    pub request: SpacingRequest,
}

pub fn load_requests_csv(path: &Path) -> Result<Vec<BatchRow>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_requests(rdr)
}

pub fn read_requests<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<BatchRow>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "batch headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_span = idx(&["span_m", "span", "brackets_length", "length_m", "length"]);
    let i_offset = idx(&["offset_mm", "offset"]);
    let i_count = idx(&["brackets", "bracket_count", "num_brackets", "count"]);

    let (Some(i_span), Some(i_offset), Some(i_count)) = (i_span, i_offset, i_count) else {
        anyhow::bail!("batch file needs span_m, offset_mm and brackets columns, got {:?}", headers);
    };

    let mut out = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let row = n + 1;
        let rec = rec.with_context(|| format!("reading row {row}"))?;
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");

        let span = field(i_span).parse::<f64>();
        let offset = field(i_offset).parse::<f64>();
        let count = field(i_count).parse::<u32>();
        match (span, offset, count) {
            (Ok(span), Ok(offset), Ok(count)) => out.push(BatchRow {
                row,
                request: SpacingRequest::new(span, offset, count),
            }),
            _ => warn!(row, record = ?rec, "skipping row with non-numeric values"),
        }
    }
    Ok(out)
}

/// Per-row output name `<stem>_<row>.<ext>` next to `base`.
pub fn row_output_path(base: &Path, row: usize, ext: &str) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("bracket_spacing");
    base.with_file_name(format!("{}_{}.{}", stem, row, ext))
}
