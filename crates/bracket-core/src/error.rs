// File: crates/bracket-core/src/error.rs
// Summary: Domain error for rejected spacing inputs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpacingError {
    /// Inputs that would produce a division by zero or meaningless geometry.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SpacingError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    /// Human-readable reason, without the "invalid input" prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
        }
    }
}
