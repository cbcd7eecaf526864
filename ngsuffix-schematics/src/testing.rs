//! Test utilities for schematic runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use eyre::Result;
use ngsuffix_core::{Tree, join_path};
use ngsuffix_manifest::{MANIFEST_FILE, OptionMap};
use serde_json::Value;

use crate::{EffectiveOptions, ExternalGenerator, LogicalName, paths::DEFAULT_ROOT};

/// Create an in-memory tree holding `manifest` as angular.json.
pub fn tree_with_manifest(manifest: &Value) -> Tree {
    let mut tree = Tree::empty();
    tree.create(MANIFEST_FILE, manifest.to_string())
        .expect("empty tree has no manifest yet");
    tree
}

/// Build an option map from a JSON object.
///
/// Non-object values yield an empty map.
pub fn options(value: Value) -> OptionMap {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => OptionMap::new(),
    }
}

/// A generator that mimics the upstream layout for COMPLEX kinds.
///
/// Writes `<dir>/<name>-<kind>.ts` declaring `export class <Pascal>`, without
/// the kind suffix, and, unless `skipTests` is set, a spec file importing it
/// by relative path.
/// The written paths are derived independently of [`crate::paths`], the
/// way an external tool would.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockGenerator;

impl ExternalGenerator for MockGenerator {
    fn generate(
        &self,
        tree: &mut Tree,
        _collection: &str,
        kind: &str,
        options: &EffectiveOptions,
    ) -> Result<()> {
        let name = LogicalName::parse(options.name().unwrap_or_default());
        let file = ngsuffix_core::to_kebab_case(name.base_name);
        let class = ngsuffix_core::to_pascal_case(name.base_name);

        let mut dir = join_path(options.path().unwrap_or(DEFAULT_ROOT), name.path_prefix);
        if !options.flat() {
            dir = join_path(&dir, &file);
        }

        let stem = format!("{}-{}", file, kind);
        tree.create(
            &join_path(&dir, &format!("{}.ts", stem)),
            format!("export class {} {{}}\n", class),
        )?;
        if !options.skip_tests() {
            tree.create(
                &join_path(&dir, &format!("{}.spec.ts", stem)),
                format!("import * as subject from './{}';\n", stem),
            )?;
        }
        Ok(())
    }
}
