//! TypeScript AST builders for imports, object literals and decorators.

mod imports;
mod objects;

pub use imports::Import;
pub use objects::{Decorator, JsObject, Property, PropertyValue};
