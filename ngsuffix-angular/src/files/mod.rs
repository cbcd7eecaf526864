//! Angular source file generators, one module per artifact kind.

mod component;
mod directive;
mod guard;
mod interceptor;
mod pipe;
mod resolver;
mod service;

pub use component::{
    ComponentOptions, ComponentSpec, ComponentStyle, ComponentTemplate, ComponentTs, Style,
};
pub use directive::{DirectiveSpec, DirectiveTs};
pub use guard::{GuardInterface, GuardSpec, GuardTs};
pub use interceptor::{InterceptorSpec, InterceptorTs};
pub use pipe::{PipeSpec, PipeTs};
pub use resolver::{ResolverSpec, ResolverTs};
pub use service::{ServiceSpec, ServiceTs};

use crate::{ArtifactNames, CodeFile, ast::Import};

/// A file produced for an artifact.
pub trait GeneratedFile {
    /// Tree path the file is written to.
    fn path(&self) -> String;

    /// The file content.
    fn render(&self) -> String;
}

/// Body of an empty class declaration, as Angular lays it out.
pub(crate) fn class_block(header: &str, members: &[&str]) -> String {
    if members.is_empty() {
        return format!("{} {{\n\n}}", header);
    }
    let body: Vec<String> = members
        .iter()
        .map(|member| indent(member))
        .collect();
    format!("{} {{\n{}\n}}", header, body.join("\n\n"))
}

/// Indent every non-empty line by two spaces.
pub(crate) fn indent(code: &str) -> String {
    code.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spec for a function-style artifact, run inside an injection context.
pub(crate) fn functional_spec(
    names: &ArtifactNames,
    fn_type: &str,
    module: &str,
    executor: &str,
) -> String {
    let name = &names.fn_name;
    let type_name = fn_type.split('<').next().unwrap_or(fn_type);

    CodeFile::new()
        .import(Import::new("@angular/core/testing").named("TestBed"))
        .import(Import::new(module).named(type_name))
        .import(Import::new(names.import_path()).named(name))
        .add(format!(
            "describe('{name}', () => {{
  const {executor}: {fn_type} = (...parameters) =>
      TestBed.runInInjectionContext(() => {name}(...parameters));

  beforeEach(() => {{
    TestBed.configureTestingModule({{}});
  }});

  it('should be created', () => {{
    expect({executor}).toBeTruthy();
  }});
}});"
        ))
        .render()
}

/// Spec for an injectable class, resolved through `TestBed.inject`.
///
/// With `provide`, the class is listed in the testing module's providers.
pub(crate) fn injectable_spec(names: &ArtifactNames, var: &str, provide: bool) -> String {
    let class = &names.class_name;
    let module = if provide {
        format!("{{\n      providers: [{class}]\n    }}")
    } else {
        "{}".to_string()
    };

    CodeFile::new()
        .import(Import::new("@angular/core/testing").named("TestBed"))
        .import(Import::new(names.import_path()).named(class))
        .add(format!(
            "describe('{class}', () => {{
  let {var}: {class};

  beforeEach(() => {{
    TestBed.configureTestingModule({module});
    {var} = TestBed.inject({class});
  }});

  it('should be created', () => {{
    expect({var}).toBeTruthy();
  }});
}});"
        ))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class_block() {
        assert_eq!(
            class_block("export class Cart", &[]),
            "export class Cart {\n\n}"
        );
    }

    #[test]
    fn test_class_block_members() {
        assert_eq!(
            class_block("export class A", &["constructor() { }", "run() {\n  return 1;\n}"]),
            "export class A {\n  constructor() { }\n\n  run() {\n    return 1;\n  }\n}"
        );
    }
}
