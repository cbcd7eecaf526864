//! Pipe class and spec.

use ngsuffix_core::to_camel_case;

use super::{GeneratedFile, class_block};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

pub struct PipeTs<'a> {
    pub names: &'a ArtifactNames,
    pub standalone: bool,
}

impl GeneratedFile for PipeTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        let decorator = Decorator::new("Pipe").metadata(
            JsObject::new()
                .string("name", to_camel_case(&self.names.file_name))
                .raw_if(!self.standalone, "standalone", "false"),
        );
        let class = class_block(
            &format!(
                "export class {} implements PipeTransform",
                self.names.class_name
            ),
            &["transform(value: unknown, ...args: unknown[]): unknown {\n  return null;\n}"],
        );

        CodeFile::new()
            .import(
                Import::new("@angular/core")
                    .named("Pipe")
                    .named("PipeTransform"),
            )
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

pub struct PipeSpec<'a> {
    pub names: &'a ArtifactNames,
}

impl GeneratedFile for PipeSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        let class = &self.names.class_name;
        CodeFile::new()
            .import(Import::new(self.names.import_path()).named(class))
            .add(format!(
                "describe('{class}', () => {{
  it('create an instance', () => {{
    const pipe = new {class}();
    expect(pipe).toBeTruthy();
  }});
}});"
            ))
            .render()
    }
}
