//! Project entries of the workspace manifest.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{SchematicDefaults, lenient};

/// A single entry of the `projects` map.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project root relative to the workspace
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub root: Option<String>,

    /// Source root relative to the workspace (e.g. "src")
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_root: Option<String>,

    /// Selector prefix for components and directives
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefix: Option<String>,

    /// "application" or "library"
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_type: Option<String>,

    /// Project-level schematic defaults
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "indexmap::IndexMap::is_empty"
    )]
    pub schematics: SchematicDefaults,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Returns true if the project is declared as a library.
    pub fn is_library(&self) -> bool {
        self.project_type.as_deref() == Some("library")
    }

    /// Directory new artifacts are placed in when no path is given.
    ///
    /// `<sourceRoot>/app` for applications and `<sourceRoot>/lib` for
    /// libraries. Without a source root, `<root>/src` is assumed.
    pub fn default_path(&self) -> String {
        let source_root = match (&self.source_root, &self.root) {
            (Some(source_root), _) => source_root.clone(),
            (None, Some(root)) if !root.is_empty() => format!("{}/src", root),
            (None, _) => "src".to_string(),
        };
        let leaf = if self.is_library() { "lib" } else { "app" };

        let joined = format!("{}/{}", source_root.trim_matches('/'), leaf);
        joined.trim_start_matches('/').to_string()
    }
}
