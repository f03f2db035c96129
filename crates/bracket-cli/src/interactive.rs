// File: crates/bracket-cli/src/interactive.rs
// Summary: Line-per-trigger loop: each input line is one recomputation request.

use std::io::{BufRead, Write};

use anyhow::Result;
use bracket_core::{Outcome, SpacingError, SpacingRequest, SpacingSession};
use tracing::debug;

/// Parse `span_m offset_mm brackets` (whitespace or comma separated).
pub fn parse_trigger_line(line: &str) -> Result<SpacingRequest, SpacingError> {
    let parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>();
    let [span, offset, count] = parts.as_slice() else {
        return Err(SpacingError::invalid(format!(
            "expected 3 values (span_m offset_mm brackets), got {}",
            parts.len()
        )));
    };
    let span = span
        .parse::<f64>()
        .map_err(|_| SpacingError::invalid(format!("span length '{span}' is not a number")))?;
    let offset = offset
        .parse::<f64>()
        .map_err(|_| SpacingError::invalid(format!("offset '{offset}' is not a number")))?;
    let count = count
        .parse::<u32>()
        .map_err(|_| SpacingError::invalid(format!("bracket count '{count}' is not a whole number")))?;
    Ok(SpacingRequest::new(span, offset, count))
}

/// Read triggers until EOF or `q`. Successful outcomes are handed to `on_outcome`;
/// failures are reported on `out` and the previous outcome stays current.
pub fn run<R, W, F>(session: &mut SpacingSession, input: R, mut out: W, mut on_outcome: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Outcome) -> Result<()>,
{
    writeln!(out, "Enter: span_m offset_mm brackets (q to quit)")?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        debug!(line, "trigger");
        match parse_trigger_line(line).and_then(|req| session.trigger(req).cloned()) {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.summary())?;
                on_outcome(&outcome)?;
            }
            Err(e) => {
                writeln!(out, "error: {}", e.reason())?;
                if let Some(prev) = session.current() {
                    writeln!(out, "(still showing {})", prev.summary())?;
                }
            }
        }
    }
    Ok(())
}
