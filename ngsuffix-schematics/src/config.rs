//! Workspace option defaults.
//!
//! Defaults come from two scopes of angular.json, the workspace root and the
//! target project, each holding a `schematics` block keyed by schematic
//! name. Project scope is applied after workspace scope and therefore wins.
//!
//! Resolution is best effort: a missing or unparsable manifest yields no
//! defaults rather than an error, and entries written in shapes other tools
//! use are skipped without losing the rest.

use ngsuffix_core::Tree;
use ngsuffix_manifest::{
    COLLECTION_ID, MANIFEST_FILE, OptionMap, SchematicDefaults, UPSTREAM_COLLECTION,
    WorkspaceManifest,
};
use serde_json::Value;
use tracing::debug;

use crate::ArtifactKind;

/// Keys under which defaults for `kind` may be declared, in merge order.
///
/// # Examples
///
/// ```
/// use ngsuffix_schematics::{ArtifactKind, config::schematic_keys};
///
/// assert_eq!(
///     schematic_keys(ArtifactKind::Pipe),
///     ["pipe", "@schematics/angular:pipe", "ngsuffix:pipe"]
/// );
/// ```
pub fn schematic_keys(kind: ArtifactKind) -> [String; 3] {
    let name = kind.name();
    [
        name.to_string(),
        format!("{}:{}", UPSTREAM_COLLECTION, name),
        format!("{}:{}", COLLECTION_ID, name),
    ]
}

/// Load the workspace manifest from the tree.
///
/// Returns `None` when the manifest is absent, unreadable or malformed.
pub fn load_manifest(tree: &Tree) -> Option<WorkspaceManifest> {
    let content = match tree.read(MANIFEST_FILE) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("no {} found, using no workspace defaults", MANIFEST_FILE);
            return None;
        }
        Err(e) => {
            debug!(error = %e, "failed to read {}", MANIFEST_FILE);
            return None;
        }
    };

    match content.parse::<WorkspaceManifest>() {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            debug!(error = %e, "ignoring malformed {}", MANIFEST_FILE);
            None
        }
    }
}

/// Resolve option defaults for `kind` from the manifest in `tree`.
pub fn resolve(tree: &Tree, kind: ArtifactKind, project: Option<&str>) -> OptionMap {
    match load_manifest(tree) {
        Some(manifest) => resolve_defaults(&manifest, kind, project),
        None => OptionMap::new(),
    }
}

/// Resolve option defaults for `kind` from an already parsed manifest.
///
/// `project` falls back to the manifest's `defaultProject`. For kinds with a
/// selector prefix, the project's `prefix` is used when no schematic default
/// sets one.
pub fn resolve_defaults(
    manifest: &WorkspaceManifest,
    kind: ArtifactKind,
    project: Option<&str>,
) -> OptionMap {
    let keys = schematic_keys(kind);
    let mut defaults = OptionMap::new();

    merge_scope(&mut defaults, &manifest.schematics, &keys);

    if let Some((name, project)) = manifest.project(project) {
        merge_scope(&mut defaults, &project.schematics, &keys);

        if kind.has_selector_prefix() && !defaults.contains_key("prefix") {
            if let Some(prefix) = &project.prefix {
                debug!(project = name, prefix = %prefix, "using project prefix");
                defaults.insert("prefix".to_string(), Value::from(prefix.as_str()));
            }
        }
    }

    defaults
}

fn merge_scope(defaults: &mut OptionMap, scope: &SchematicDefaults, keys: &[String]) {
    for key in keys {
        if let Some(options) = scope.get(key.as_str()) {
            for (name, value) in options {
                defaults.insert(name.clone(), value.clone());
            }
        }
    }
}
