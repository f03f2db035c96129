// File: crates/bracket-cli/src/lib.rs
// Summary: Shell-side helpers for the bracket-spacing binary (saved defaults, batch input, CSV export).

pub mod batch;
pub mod config;
pub mod export;
pub mod interactive;
