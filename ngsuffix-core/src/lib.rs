//! Core utilities and types for ngsuffix.
//!
//! This crate provides the staged file [`Tree`] that every generation step
//! mutates, and the string helpers used to derive file and symbol names.

mod error;
mod tree;
mod utils;

pub use error::TreeError;
// File tree
pub use tree::{Action, ActionKind, Tree};
// String utilities
pub use utils::{join_path, normalize_path, to_camel_case, to_kebab_case, to_pascal_case};
