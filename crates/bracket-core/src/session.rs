// File: crates/bracket-core/src/session.rs
// Summary: Explicit recomputation per trigger; a failed trigger leaves the previous outcome in place.

use tracing::info;

use crate::diagram::{Diagram, DiagramOptions};
use crate::error::SpacingError;
use crate::spacing::{compute, SpacingRequest, SpacingResult};

/// Everything the shell shows after a successful trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub request: SpacingRequest,
    pub result: SpacingResult,
    pub diagram: Diagram,
}

impl Outcome {
    pub fn summary(&self) -> String {
        self.result.summary()
    }
}

#[derive(Debug, Default)]
pub struct SpacingSession {
    options: DiagramOptions,
    last: Option<Outcome>,
    triggers: u64,
}

impl SpacingSession {
    pub fn new(options: DiagramOptions) -> Self {
        Self { options, last: None, triggers: 0 }
    }

    /// Recompute from scratch for `request`. Nothing is cached between triggers.
    pub fn trigger(&mut self, request: SpacingRequest) -> Result<&Outcome, SpacingError> {
        self.triggers += 1;
        let result = compute(&request)?;
        let diagram = Diagram::build(&result, &self.options);
        info!(trigger = self.triggers, spacing_mm = result.spacing_mm, "recomputed");
        Ok(&*self.last.insert(Outcome { request, result, diagram }))
    }

    /// Last successful outcome, if any.
    pub fn current(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    pub fn triggers(&self) -> u64 {
        self.triggers
    }
}
