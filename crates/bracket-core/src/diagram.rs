// File: crates/bracket-core/src/diagram.rs
// Summary: Lays out the bracket schematic (baseline, markers, annotations, dimension arrows)
// for a computed spacing result. Pure: no drawing happens here.

use crate::annotation::{Element, Ink};
use crate::axis::Axis;
use crate::spacing::SpacingResult;
use crate::types::Point;

pub const TITLE: &str = "Bracket Positions with Values";
pub const X_LABEL: &str = "Position (mm)";
/// Fixed vertical band of the schematic.
pub const Y_RANGE: (f64, f64) = (-50.0, 50.0);
/// Offset dimension label printed regardless of the configured offset.
pub const FIXED_OFFSET_LABEL: &str = "200 mm";
/// Fraction of the data width added on each side of the x range.
const X_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Label the offset dimensions with the real offset instead of the fixed "200 mm".
    pub label_actual_offset: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: bool,
    pub elements: Vec<Element>,
}

impl Diagram {
    pub fn build(result: &SpacingResult, opts: &DiagramOptions) -> Self {
        let total = result.total_length_mm;
        let offset = result.offset_mm;
        let span = result.span_length_mm;
        let last_bracket = result.last_bracket_mm();

        let mut elements = Vec::with_capacity(result.positions_mm.len() + 10);

        // Roof line.
        elements.push(Element::Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(total, 0.0),
            ink: Ink::Baseline,
            width: 2.0,
        });

        for &x in &result.positions_mm {
            elements.push(Element::Marker { at: Point::new(x, 0.0), ink: Ink::Marker, radius: 4.0 });
        }

        elements.push(Element::Pointer {
            text: format!("Length between brackets: {:.3} m", result.span_length_m()),
            target: Point::new(span / 2.0, 0.0),
            text_at: Point::new(span / 2.0, 20.0),
            ink: Ink::Span,
            size: 10.0,
        });
        elements.push(Element::Pointer {
            text: "1st Bracket".to_string(),
            target: Point::new(offset, 0.0),
            text_at: Point::new(offset, 30.0),
            ink: Ink::Bracket,
            size: 6.0,
        });
        elements.push(Element::Pointer {
            text: "Last Bracket".to_string(),
            target: Point::new(last_bracket, 0.0),
            text_at: Point::new(last_bracket, 30.0),
            ink: Ink::Bracket,
            size: 6.0,
        });

        elements.push(Element::Dimension {
            from: Point::new(0.0, -10.0),
            to: Point::new(total, -10.0),
            ink: Ink::Span,
            width: 1.5,
        });
        elements.push(Element::Text {
            text: format!("Total Length: {:.1} mm", total),
            at: Point::new(total / 2.0, -20.0),
            ink: Ink::Span,
            size: 6.0,
        });

        let offset_label = if opts.label_actual_offset {
            format!("{} mm", offset)
        } else {
            FIXED_OFFSET_LABEL.to_string()
        };
        elements.push(Element::Dimension {
            from: Point::new(0.0, -30.0),
            to: Point::new(offset, -30.0),
            ink: Ink::Bracket,
            width: 1.5,
        });
        elements.push(Element::Text {
            text: offset_label.clone(),
            at: Point::new(offset / 2.0, -40.0),
            ink: Ink::Bracket,
            size: 10.0,
        });
        elements.push(Element::Dimension {
            from: Point::new(last_bracket, -30.0),
            to: Point::new(total, -30.0),
            ink: Ink::Bracket,
            width: 1.5,
        });
        elements.push(Element::Text {
            text: offset_label,
            at: Point::new(total - offset / 2.0, -40.0),
            ink: Ink::Bracket,
            size: 10.0,
        });

        let (x_min, x_max) = padded_x_range(&elements);
        Self {
            title: TITLE.to_string(),
            x_axis: Axis::new(X_LABEL, x_min, x_max),
            y_axis: Axis::hidden(Y_RANGE.0, Y_RANGE.1),
            grid: true,
            elements,
        }
    }

    /// All labels in drawing order.
    pub fn labels(&self) -> Vec<&str> {
        self.elements.iter().filter_map(Element::text).collect()
    }

    pub fn markers(&self) -> Vec<f64> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Marker { at, .. } => Some(at.x),
                _ => None,
            })
            .collect()
    }
}

fn padded_x_range(elements: &[Element]) -> (f64, f64) {
    let (lo, hi) = elements.iter().map(Element::x_extent).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), (a, b)| (lo.min(a), hi.max(b)),
    );
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * X_MARGIN).max(1e-6);
    (lo - pad, hi + pad)
}
