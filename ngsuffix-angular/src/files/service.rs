//! Service class and spec.

use super::{GeneratedFile, class_block};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

pub struct ServiceTs<'a> {
    pub names: &'a ArtifactNames,
}

impl GeneratedFile for ServiceTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        let decorator =
            Decorator::new("Injectable").metadata(JsObject::new().string("providedIn", "root"));
        let class = class_block(
            &format!("export class {}", self.names.class_name),
            &["constructor() { }"],
        );

        CodeFile::new()
            .import(Import::new("@angular/core").named("Injectable"))
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

pub struct ServiceSpec<'a> {
    pub names: &'a ArtifactNames,
}

impl GeneratedFile for ServiceSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        let class = &self.names.class_name;
        CodeFile::new()
            .import(Import::new("@angular/core/testing").named("TestBed"))
            .import(Import::new(self.names.import_path()).named(class))
            .add(format!(
                "describe('{class}', () => {{
  let service: {class};

  beforeEach(() => {{
    TestBed.configureTestingModule({{}});
    service = TestBed.inject({class});
  }});

  it('should be created', () => {{
    expect(service).toBeTruthy();
  }});
}});"
            ))
            .render()
    }
}
