//! Generation options.

use ngsuffix_manifest::OptionMap;
use serde::Serialize;
use serde_json::Value;

/// The fully merged option set for one generation run.
///
/// Wraps an [`OptionMap`] with typed accessors for the options every kind
/// understands (`name`, `path`, `project`, `flat`, `skipTests`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EffectiveOptions(OptionMap);

impl EffectiveOptions {
    pub fn new(options: OptionMap) -> Self {
        Self(options)
    }

    /// Layer `overrides` on top of `defaults`; overrides always win.
    pub fn merge(defaults: OptionMap, overrides: &OptionMap) -> Self {
        let mut merged = defaults;
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value of `key`, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value of `key`, if present and a boolean.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Boolean value of `key`, treating absence as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.bool(key).unwrap_or(false)
    }

    /// Set `key`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set `key` only if it has no value yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.str("name")
    }

    pub fn path(&self) -> Option<&str> {
        self.str("path")
    }

    pub fn project(&self) -> Option<&str> {
        self.str("project")
    }

    pub fn flat(&self) -> bool {
        self.flag("flat")
    }

    pub fn skip_tests(&self) -> bool {
        self.flag("skipTests")
    }
}

impl From<OptionMap> for EffectiveOptions {
    fn from(options: OptionMap) -> Self {
        Self(options)
    }
}
