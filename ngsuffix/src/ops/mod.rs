//! Core operations.
//!
//! This module contains the business logic for ngsuffix commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;
pub mod kinds;

pub use generate::{GenerateOptions, generate};
pub use init::init;
pub use kinds::kinds;
