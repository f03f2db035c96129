// File: crates/bracket-cli/src/export.rs
// Summary: Write bracket positions as a CSV table.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use bracket_core::SpacingResult;

/// Columns: `index,position_mm`. One row per computed point.
pub fn write_positions<W: Write>(result: &SpacingResult, w: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["index", "position_mm"])?;
    for (i, p) in result.positions_mm.iter().enumerate() {
        wtr.write_record([i.to_string(), p.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_positions_csv(result: &SpacingResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_positions(result, file)
}
