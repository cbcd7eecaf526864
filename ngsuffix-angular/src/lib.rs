//! Reference Angular generator for ngsuffix.
//!
//! This crate stands in for the upstream `@schematics/angular` collection: it
//! writes the files Angular's own generators produce, into a staged
//! [`Tree`](ngsuffix_core::Tree). The schematic runner in
//! `ngsuffix-schematics` then corrects names on top of that output.
//!
//! # Usage
//!
//! ```
//! use ngsuffix_angular::Generator;
//! use ngsuffix_core::Tree;
//! use ngsuffix_schematics::{ArtifactKind, Schematic, testing::options};
//! use serde_json::json;
//!
//! let mut tree = Tree::empty();
//! let outcome = Schematic::new(ArtifactKind::Pipe)
//!     .run(&mut tree, &Generator, options(json!({ "name": "price" })))?;
//!
//! assert!(tree.exists("src/app/price/price.pipe.ts"));
//! assert_eq!(outcome.renames.len(), 2);
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! # Generated Output
//!
//! | Kind        | Files                                                 |
//! |-------------|-------------------------------------------------------|
//! | component   | `<name>.component.{ts,html,css,spec.ts}`              |
//! | directive   | `<name>.directive.{ts,spec.ts}`                       |
//! | service     | `<name>.service.{ts,spec.ts}`                         |
//! | pipe        | `<name>-pipe.{ts,spec.ts}`                            |
//! | guard       | `<name>-guard.{ts,spec.ts}`                           |
//! | interceptor | `<name>-interceptor.{ts,spec.ts}`                     |
//! | resolver    | `<name>-resolver.{ts,spec.ts}`                        |

mod code_file;
mod generator;
mod naming;

pub mod ast;
pub mod files;

pub use ast::{Decorator, Import, JsObject};
pub use code_file::CodeFile;
pub use generator::Generator;
pub use naming::ArtifactNames;
