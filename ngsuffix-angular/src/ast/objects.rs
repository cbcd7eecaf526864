//! TypeScript object literal and decorator builders.

/// A property in a TypeScript object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A literal string value (will be single-quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
}

impl PropertyValue {
    fn render(&self) -> String {
        match self {
            PropertyValue::String(s) => format!("'{}'", s.replace('\'', "\\'")),
            PropertyValue::Raw(s) => s.clone(),
        }
    }
}

/// Builder for object literals, rendered one property per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        });
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Conditionally add a string property using an Option.
    pub fn string_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.raw(key, value)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render with two-space indented properties.
    pub fn build(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props: Vec<String> = self
            .properties
            .iter()
            .map(|p| format!("  {}: {}", p.key, p.value.render()))
            .collect();
        format!("{{\n{}\n}}", props.join(",\n"))
    }
}

/// A class decorator such as `@Component({ ... })`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    name: String,
    metadata: Option<JsObject>,
}

impl Decorator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
        }
    }

    pub fn metadata(mut self, metadata: JsObject) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn build(&self) -> String {
        match &self.metadata {
            Some(metadata) => format!("@{}({})", self.name, metadata.build()),
            None => format!("@{}()", self.name),
        }
    }
}
