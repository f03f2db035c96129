// File: crates/bracket-core/src/lib.rs
// Summary: Core library entry point; exports the spacing calculator, diagram model and rendering API.

pub mod spacing;
pub mod error;
pub mod session;
pub mod diagram;
pub mod annotation;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod render;

pub use spacing::{compute, SpacingRequest, SpacingResult};
pub use error::SpacingError;
pub use session::{Outcome, SpacingSession};
pub use diagram::{Diagram, DiagramOptions};
pub use annotation::{Element, Ink};
pub use axis::Axis;
pub use render::RenderOptions;
pub use theme::Theme;
pub use text::TextShaper;
