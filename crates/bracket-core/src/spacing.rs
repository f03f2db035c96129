// File: crates/bracket-core/src/spacing.rs
// Summary: Spacing calculator: span/offset/count in, rounded spacing and bracket positions out.
// Notes:
// - Spacing is rounded half-to-even (banker's rounding), so 2.5 -> 2 and 3.5 -> 4.
// - Positions are offset + i * spacing for i in 0..=bracket_count, i.e. one more
//   point than the bracket count. Positions are not clamped to the span.

use tracing::{debug, warn};

use crate::error::SpacingError;

/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;
/// 2^63; every rounded spacing strictly below this converts to `i64` exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingRequest {
    /// Distance between the two reference brackets, in meters.
    pub span_length_m: f64,
    /// Distance from each end of the total length to the first/last bracket, in mm.
    pub offset_mm: f64,
    pub bracket_count: u32,
}

impl SpacingRequest {
    pub const fn new(span_length_m: f64, offset_mm: f64, bracket_count: u32) -> Self {
        Self { span_length_m, offset_mm, bracket_count }
    }

    /// Reject inputs the calculator cannot turn into geometry.
    pub fn validate(&self) -> Result<(), SpacingError> {
        if !self.span_length_m.is_finite() {
            return Err(SpacingError::invalid(format!(
                "span length must be a finite number, got {}",
                self.span_length_m
            )));
        }
        if self.span_length_m <= 0.0 {
            return Err(SpacingError::invalid(format!(
                "span length must be positive, got {} m",
                self.span_length_m
            )));
        }
        if !self.offset_mm.is_finite() {
            return Err(SpacingError::invalid(format!(
                "offset must be a finite number, got {}",
                self.offset_mm
            )));
        }
        if self.offset_mm < 0.0 {
            return Err(SpacingError::invalid(format!(
                "offset must not be negative, got {} mm",
                self.offset_mm
            )));
        }
        if self.bracket_count == 0 {
            return Err(SpacingError::invalid("number of brackets must be at least 1"));
        }

        // Finite inputs can still overflow once converted and combined.
        let span_length_mm = self.span_length_mm();
        if !span_length_mm.is_finite() {
            return Err(SpacingError::invalid(format!(
                "span length of {} m is too large to express in mm",
                self.span_length_m
            )));
        }
        let raw_spacing = span_length_mm / f64::from(self.bracket_count);
        if !raw_spacing.is_finite() {
            return Err(SpacingError::invalid("spacing is not a finite number"));
        }
        if raw_spacing.round_ties_even() >= I64_LIMIT {
            return Err(SpacingError::invalid(format!(
                "spacing of {raw_spacing} mm does not fit a whole-millimeter value"
            )));
        }
        if !(2.0 * self.offset_mm + span_length_mm).is_finite() {
            return Err(SpacingError::invalid("total length (span plus both offsets) is too large"));
        }
        Ok(())
    }

    pub fn span_length_mm(&self) -> f64 {
        self.span_length_m * MM_PER_M
    }
}

impl Default for SpacingRequest {
    /// The calculator's initial form values.
    fn default() -> Self {
        Self::new(14.879, 200.0, 19)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpacingResult {
    pub span_length_mm: f64,
    pub offset_mm: f64,
    pub bracket_count: u32,
    pub spacing_mm: i64,
    pub positions_mm: Vec<f64>,
    pub total_length_mm: f64,
}

impl SpacingResult {
    /// Span converted back to meters, for display.
    pub fn span_length_m(&self) -> f64 {
        self.span_length_mm / MM_PER_M
    }

    /// X coordinate of the "Last Bracket" annotation: total - 2 * offset.
    pub fn last_bracket_mm(&self) -> f64 {
        self.total_length_mm - 2.0 * self.offset_mm
    }

    /// Text shown to the user after a successful computation.
    pub fn summary(&self) -> String {
        format!("Spacing: {}mm", self.spacing_mm)
    }
}

/// Compute spacing and bracket positions for `req`.
pub fn compute(req: &SpacingRequest) -> Result<SpacingResult, SpacingError> {
    if let Err(e) = req.validate() {
        warn!(?req, reason = e.reason(), "rejected spacing request");
        return Err(e);
    }

    let span_length_mm = req.span_length_mm();
    let spacing_mm = round_spacing(span_length_mm / f64::from(req.bracket_count));
    let total_length_mm = 2.0 * req.offset_mm + span_length_mm;
    let positions_mm = (0..=req.bracket_count)
        .map(|i| req.offset_mm + f64::from(i) * spacing_mm as f64)
        .collect::<Vec<_>>();

    debug!(
        span_length_mm,
        spacing_mm,
        total_length_mm,
        points = positions_mm.len(),
        "computed bracket spacing"
    );

    Ok(SpacingResult {
        span_length_mm,
        offset_mm: req.offset_mm,
        bracket_count: req.bracket_count,
        spacing_mm,
        positions_mm,
        total_length_mm,
    })
}

#[inline]
fn round_spacing(v: f64) -> i64 {
    v.round_ties_even() as i64
}
