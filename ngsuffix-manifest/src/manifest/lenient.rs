//! Tolerant field deserializers.
//!
//! angular.json is shared with other tools (Nx, custom builders) that store
//! shapes this model does not know. A field that cannot be read falls back
//! to its default instead of failing the whole manifest.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Read the field as `T`, or `T::default()` if it has another shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Read an object field entry by entry, skipping entries that are not a `T`.
///
/// Anything other than an object yields an empty map.
pub(crate) fn entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(IndexMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| serde_json::from_value(value).ok().map(|entry| (key, entry)))
        .collect())
}
