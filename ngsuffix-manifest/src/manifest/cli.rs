use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `cli` block of angular.json
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Collections consulted by `ng generate`, first match wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schematic_collections: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
