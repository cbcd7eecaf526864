//! TypeScript import builder.

/// Builder for TypeScript import statements.
///
/// Angular sources use single-quoted module specifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Conditionally import a named export.
    pub fn named_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.named(name) } else { self }
    }

    /// The module specifier.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Build the import as a single line, without a trailing newline.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!(
                "import {{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("@angular/core").named("Component").build();
        assert_eq!(i, "import { Component } from '@angular/core';");
    }

    #[test]
    fn test_multiple_named() {
        let i = Import::new("@angular/core")
            .named("ChangeDetectionStrategy")
            .named("Component")
            .build();
        assert_eq!(
            i,
            "import { ChangeDetectionStrategy, Component } from '@angular/core';"
        );
    }

    #[test]
    fn test_named_if() {
        let i = Import::new("rxjs")
            .named("Observable")
            .named_if(false, "of")
            .build();
        assert_eq!(i, "import { Observable } from 'rxjs';");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("zone.js").build(), "import 'zone.js';");
    }
}
