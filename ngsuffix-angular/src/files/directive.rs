//! Directive class and spec.

use ngsuffix_core::to_camel_case;
use ngsuffix_schematics::EffectiveOptions;

use super::{GeneratedFile, class_block};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

/// The directive class file.
pub struct DirectiveTs<'a> {
    pub names: &'a ArtifactNames,
    pub selector: String,
    pub standalone: bool,
}

impl<'a> DirectiveTs<'a> {
    /// Attribute selector: the `selector` option, else `[camel(prefix-name)]`.
    pub fn new(names: &'a ArtifactNames, options: &EffectiveOptions) -> Self {
        let selector = match options.str("selector") {
            Some(selector) => selector.to_string(),
            None => {
                let raw = match options.str("prefix").filter(|p| !p.is_empty()) {
                    Some(prefix) => format!("{}-{}", prefix, names.file_name),
                    None => names.file_name.clone(),
                };
                format!("[{}]", to_camel_case(&raw))
            }
        };

        Self {
            names,
            selector,
            standalone: options.bool("standalone").unwrap_or(true),
        }
    }
}

impl GeneratedFile for DirectiveTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        let decorator = Decorator::new("Directive").metadata(
            JsObject::new()
                .string("selector", &self.selector)
                .raw_if(!self.standalone, "standalone", "false"),
        );
        let class = class_block(
            &format!("export class {}", self.names.class_name),
            &["constructor() { }"],
        );

        CodeFile::new()
            .import(Import::new("@angular/core").named("Directive"))
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

/// The directive spec file.
pub struct DirectiveSpec<'a> {
    pub names: &'a ArtifactNames,
}

impl GeneratedFile for DirectiveSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        let class = &self.names.class_name;
        CodeFile::new()
            .import(Import::new(self.names.import_path()).named(class))
            .add(format!(
                "describe('{class}', () => {{
  it('should create an instance', () => {{
    const directive = new {class}();
    expect(directive).toBeTruthy();
  }});
}});"
            ))
            .render()
    }
}
