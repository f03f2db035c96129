// File: crates/bracket-core/src/scale.rs
// Summary: Linear world -> screen transform for the diagram's X (mm) and Y (fixed band) axes.

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::types::Point;

/// Maps world coordinates onto the plot rectangle. Y grows upward in world space.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    left_px: f32,
    right_px: f32,
    top_px: f32,
    bottom_px: f32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl PlotScale {
    pub fn new(area: RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            left_px: area.left as f32,
            right_px: area.right as f32,
            top_px: area.top as f32,
            bottom_px: area.bottom as f32,
            x_min: x_axis.min,
            x_span: x_axis.span(),
            y_min: y_axis.min,
            y_span: y_axis.span(),
        }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        self.left_px + ((x - self.x_min) / self.x_span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        self.bottom_px - ((y - self.y_min) / self.y_span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn to_px(&self, p: Point) -> (f32, f32) {
        (self.to_px_x(p.x), self.to_px_y(p.y))
    }
}
