// File: crates/bracket-core/src/annotation.rs
// Summary: Renderer-agnostic diagram elements (segments, markers, pointers, dimension arrows, text).

use crate::types::Point;

/// Color role of an element; the theme decides the actual color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    Baseline,
    Marker,
    Span,
    Bracket,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Straight stroke between two points.
    Segment { from: Point, to: Point, ink: Ink, width: f32 },
    /// Filled circle marker.
    Marker { at: Point, ink: Ink, radius: f32 },
    /// Text at `text_at` with a single-headed arrow pointing at `target`.
    Pointer { text: String, target: Point, text_at: Point, ink: Ink, size: f32 },
    /// Double-headed dimension arrow between two points.
    Dimension { from: Point, to: Point, ink: Ink, width: f32 },
    /// Free-standing label, centered on `at`.
    Text { text: String, at: Point, ink: Ink, size: f32 },
}

impl Element {
    /// Label carried by the element, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Pointer { text, .. } | Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Smallest and largest x touched by the element.
    pub fn x_extent(&self) -> (f64, f64) {
        match self {
            Element::Segment { from, to, .. } | Element::Dimension { from, to, .. } => {
                (from.x.min(to.x), from.x.max(to.x))
            }
            Element::Marker { at, .. } | Element::Text { at, .. } => (at.x, at.x),
            Element::Pointer { target, text_at, .. } => {
                (target.x.min(text_at.x), target.x.max(text_at.x))
            }
        }
    }
}
