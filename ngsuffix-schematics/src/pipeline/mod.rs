//! Schematic pipeline.
//!
//! A [`Schematic`] composes the naming steps around one external generator
//! invocation. The steps are explicit [`Phase`]s sharing a
//! [`GenerationContext`], which holds the tree being mutated, the effective
//! options and the diagnostics absorbed along the way.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::{GenerationOutcome, Schematic};
