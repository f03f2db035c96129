// File: crates/bracket-core/src/axis.rs
// Summary: Axis model with label, range and tick visibility.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub show_ticks: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, show_ticks: true }
    }

    /// Axis without a label and without tick marks or tick labels.
    pub fn hidden(min: f64, max: f64) -> Self {
        Self { label: String::new(), min, max, show_ticks: false }
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
