//! The ngsuffix naming engine.
//!
//! Wraps an external generator so that every artifact of a kind ends up with
//! one naming convention: dot-joined file names (`role.guard.ts`) and
//! exported symbols carrying the kind suffix exactly once (`RoleGuard`).
//!
//! # Module Organization
//!
//! - [`config`] - Option defaults from angular.json
//! - [`naming`] - Logical name decomposition
//! - [`paths`] - Generated and canonical file paths
//! - [`suffix`] - Exported symbol suffix normalization
//! - [`rename`] - Hyphen-joined to dot-joined file renames
//! - [`pipeline`] - The per-kind [`Schematic`] orchestrator
//! - [`testing`] - Test utilities (feature-gated)

pub mod config;
mod generator;
mod kind;
pub mod naming;
mod options;
pub mod paths;
pub mod pipeline;
pub mod rename;
pub mod suffix;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generator::ExternalGenerator;
pub use kind::{ArtifactKind, Classification, KindSpec};
pub use naming::{LogicalName, decompose, extract_base_name};
pub use options::EffectiveOptions;
pub use paths::{GeneratedArtifactPaths, build_path};
pub use pipeline::{Diagnostic, GenerationOutcome, Schematic, Severity};
pub use rename::{Rename, rename_to_canonical};
pub use suffix::{ensure_class_suffix, ensure_symbol_suffix};
