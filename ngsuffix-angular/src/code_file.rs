//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! organized imports and body content.

use crate::ast::Import;

/// A structured representation of a TypeScript source file.
///
/// Package imports come first, then relative imports, then body blocks.
/// Each section and each body block is separated by one blank line.
///
/// # Example
///
/// ```
/// use ngsuffix_angular::{CodeFile, ast::Import};
///
/// let code = CodeFile::new()
///     .import(Import::new("@angular/core/testing").named("TestBed"))
///     .import(Import::new("./cart.service").named("CartService"))
///     .add("describe('CartService', () => {});")
///     .render();
///
/// assert_eq!(
///     code,
///     "import { TestBed } from '@angular/core/testing';\n\n\
///      import { CartService } from './cart.service';\n\n\
///      describe('CartService', () => {});\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    local_imports: Vec<Import>,
    body: Vec<String>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement. Relative imports are grouped last.
    pub fn import(mut self, import: Import) -> Self {
        if import.from().starts_with('.') {
            self.local_imports.push(import);
        } else {
            self.imports.push(import);
        }
        self
    }

    /// Add a body block.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, block: impl Into<String>) -> Self {
        self.body.push(block.into());
        self
    }

    /// Render the file, ending with a single newline.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        for group in [&self.imports, &self.local_imports] {
            if !group.is_empty() {
                let lines: Vec<String> = group.iter().map(Import::build).collect();
                sections.push(lines.join("\n"));
            }
        }
        sections.extend(self.body.iter().map(|b| b.trim_end().to_string()));

        if sections.is_empty() {
            return String::new();
        }
        format!("{}\n", sections.join("\n\n"))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.local_imports.is_empty() && self.body.is_empty()
    }
}
