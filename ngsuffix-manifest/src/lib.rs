//! angular.json workspace manifest support.
//!
//! Parsing is tolerant: every field is optional and unknown fields are
//! preserved. Callers that must never fail on a bad manifest (such as the
//! option resolver) simply discard the returned error.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    COLLECTION_ID, CliConfig, MANIFEST_FILE, OptionMap, Project, RegisterOutcome,
    SchematicDefaults, UPSTREAM_COLLECTION, WorkspaceFile, WorkspaceManifest, parse_manifest,
    register_collection,
};
