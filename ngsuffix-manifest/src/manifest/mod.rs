//! Workspace manifest types and parsing for angular.json files.

mod cli;
mod edit;
mod file;
mod lenient;
mod parse;
mod project;

pub use cli::CliConfig;
pub use edit::{RegisterOutcome, register_collection};
pub use file::WorkspaceFile;
use indexmap::IndexMap;
pub use parse::parse_manifest;
pub use project::Project;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path of the workspace manifest, relative to the workspace root.
pub const MANIFEST_FILE: &str = "angular.json";

/// Identifier under which this collection registers itself.
pub const COLLECTION_ID: &str = "ngsuffix";

/// Identifier of the wrapped upstream collection.
pub const UPSTREAM_COLLECTION: &str = "@schematics/angular";

/// Generation options keyed by option name, in insertion order.
pub type OptionMap = IndexMap<String, Value>;

/// Per-kind option defaults keyed by schematic name
/// (e.g. `component` or `@schematics/angular:component`).
pub type SchematicDefaults = IndexMap<String, OptionMap>;

/// Root of an angular.json workspace manifest.
///
/// Every field is optional; unknown fields are kept in `extra` so that a
/// rewritten manifest loses nothing. Known fields with an unexpected shape
/// read as empty, and unreadable `projects` or `schematics` entries are
/// skipped.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceManifest {
    /// CLI settings (registered schematic collections)
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub cli: Option<CliConfig>,

    /// Project used when none is named explicitly
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_project: Option<String>,

    /// Workspace-wide schematic defaults
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub schematics: SchematicDefaults,

    /// Projects keyed by name
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub projects: IndexMap<String, Project>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkspaceManifest {
    /// Look up the target project: the named one, or `defaultProject`.
    pub fn project(&self, name: Option<&str>) -> Option<(&str, &Project)> {
        let name = name.or(self.default_project.as_deref())?;
        self.projects
            .get_key_value(name)
            .map(|(key, project)| (key.as_str(), project))
    }

    /// Registered schematic collections, in priority order.
    pub fn schematic_collections(&self) -> &[String] {
        self.cli
            .as_ref()
            .map(|cli| cli.schematic_collections.as_slice())
            .unwrap_or_default()
    }
}
