//! In-place edits of angular.json.
//!
//! Edits work on the raw JSON value so that key order and fields this
//! crate does not model are preserved.

use serde_json::{Map, Value};

use super::{COLLECTION_ID, UPSTREAM_COLLECTION};
use crate::{Result, error::SourceContext};

/// What [`register_collection`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The collection was added to `cli.schematicCollections`
    Added,
    /// The collection was already registered
    AlreadyConfigured,
}

/// Register this collection ahead of the upstream one.
///
/// Ensures `cli.schematicCollections` exists, puts [`COLLECTION_ID`] first
/// and appends [`UPSTREAM_COLLECTION`] if it is missing, so that generation
/// commands resolve here before falling back upstream. Returns the
/// rewritten content (2-space indented) and what changed.
///
/// # Examples
///
/// ```
/// use ngsuffix_manifest::{RegisterOutcome, register_collection};
///
/// let (content, outcome) = register_collection(r#"{"version": 1}"#, "angular.json").unwrap();
/// assert_eq!(outcome, RegisterOutcome::Added);
/// assert!(content.contains(r#""ngsuffix""#));
/// ```
pub fn register_collection(content: &str, filename: &str) -> Result<(String, RegisterOutcome)> {
    let source_ctx = SourceContext::new(content, filename);
    let mut root: Value = serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let root_obj = root
        .as_object_mut()
        .ok_or_else(|| source_ctx.validation_error("workspace manifest must be a JSON object"))?;

    let cli = root_obj
        .entry("cli")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| source_ctx.validation_error("'cli' must be an object"))?;

    let collections = cli
        .entry("schematicCollections")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| source_ctx.validation_error("'cli.schematicCollections' must be an array"))?;

    let contains = |list: &[Value], id: &str| list.iter().any(|v| v.as_str() == Some(id));

    let outcome = if contains(collections, COLLECTION_ID) {
        RegisterOutcome::AlreadyConfigured
    } else {
        collections.insert(0, Value::from(COLLECTION_ID));
        if !contains(collections, UPSTREAM_COLLECTION) {
            collections.push(Value::from(UPSTREAM_COLLECTION));
        }
        RegisterOutcome::Added
    };

    let rewritten = serde_json::to_string_pretty(&root)
        .map_err(|e| source_ctx.validation_error(format!("failed to serialize manifest: {e}")))?;

    Ok((rewritten, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collections(content: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(content).unwrap();
        value["cli"]["schematicCollections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_adds_cli_block() {
        let (content, outcome) = register_collection(r#"{"version": 1}"#, "angular.json").unwrap();

        assert_eq!(outcome, RegisterOutcome::Added);
        assert_eq!(collections(&content), vec![COLLECTION_ID, UPSTREAM_COLLECTION]);
    }

    #[test]
    fn test_prepends_before_existing_collections() {
        let (content, _) = register_collection(
            r#"{"cli": {"schematicCollections": ["@angular-eslint/schematics"]}}"#,
            "angular.json",
        )
        .unwrap();

        assert_eq!(
            collections(&content),
            vec![COLLECTION_ID, "@angular-eslint/schematics", UPSTREAM_COLLECTION]
        );
    }

    #[test]
    fn test_keeps_existing_upstream() {
        let (content, _) = register_collection(
            r#"{"cli": {"schematicCollections": ["@schematics/angular"]}}"#,
            "angular.json",
        )
        .unwrap();

        assert_eq!(collections(&content), vec![COLLECTION_ID, UPSTREAM_COLLECTION]);
    }

    #[test]
    fn test_already_configured() {
        let input = r#"{"cli": {"schematicCollections": ["ngsuffix", "@schematics/angular"]}}"#;
        let (content, outcome) = register_collection(input, "angular.json").unwrap();

        assert_eq!(outcome, RegisterOutcome::AlreadyConfigured);
        assert_eq!(collections(&content), vec![COLLECTION_ID, UPSTREAM_COLLECTION]);
    }

    #[test]
    fn test_preserves_other_fields_and_order() {
        let input = r#"{"version": 1, "newProjectRoot": "projects", "cli": {"analytics": false}}"#;
        let (content, _) = register_collection(input, "angular.json").unwrap();

        let version = content.find("\"version\"").unwrap();
        let root = content.find("\"newProjectRoot\"").unwrap();
        assert!(version < root);
        assert!(content.contains("\"analytics\": false"));
    }

    #[test]
    fn test_rejects_non_object_cli() {
        assert!(register_collection(r#"{"cli": []}"#, "angular.json").is_err());
        assert!(register_collection("[]", "angular.json").is_err());
    }
}
