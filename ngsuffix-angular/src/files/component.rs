//! Component files: class, template, stylesheet and spec.

use std::str::FromStr;

use eyre::{Result, bail};
use ngsuffix_schematics::EffectiveOptions;

use super::{GeneratedFile, class_block};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

/// Stylesheet language of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Css,
    Scss,
    Sass,
    Less,
    /// No stylesheet at all
    None,
}

impl Style {
    /// File extension, or `None` for [`Style::None`].
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Style::Css => Some("css"),
            Style::Scss => Some("scss"),
            Style::Sass => Some("sass"),
            Style::Less => Some("less"),
            Style::None => None,
        }
    }
}

impl FromStr for Style {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "css" => Ok(Style::Css),
            "scss" => Ok(Style::Scss),
            "sass" => Ok(Style::Sass),
            "less" => Ok(Style::Less),
            "none" => Ok(Style::None),
            other => bail!(
                "unsupported style '{}', expected one of: css, scss, sass, less, none",
                other
            ),
        }
    }
}

/// Component-specific generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOptions {
    /// `None` when `skipSelector` is set
    pub selector: Option<String>,
    pub standalone: bool,
    pub inline_template: bool,
    pub inline_style: bool,
    pub style: Style,
    pub on_push: bool,
}

impl ComponentOptions {
    pub fn from_options(names: &ArtifactNames, options: &EffectiveOptions) -> Result<Self> {
        let selector = if options.flag("skipSelector") {
            None
        } else {
            Some(match options.str("selector") {
                Some(selector) => selector.to_string(),
                None => match options.str("prefix").filter(|p| !p.is_empty()) {
                    Some(prefix) => format!("{}-{}", prefix, names.file_name),
                    None => names.file_name.clone(),
                },
            })
        };

        let style = match options.str("style") {
            Some(style) => style.parse()?,
            None => Style::default(),
        };

        Ok(Self {
            selector,
            standalone: options.bool("standalone").unwrap_or(true),
            inline_template: options.flag("inlineTemplate"),
            inline_style: options.flag("inlineStyle"),
            style,
            on_push: options.str("changeDetection") == Some("OnPush"),
        })
    }

    fn has_style_file(&self) -> bool {
        !self.inline_style && self.style.extension().is_some()
    }
}

/// The component class file.
pub struct ComponentTs<'a> {
    pub names: &'a ArtifactNames,
    pub options: &'a ComponentOptions,
}

impl ComponentTs<'_> {
    fn metadata(&self) -> JsObject {
        let names = self.names;
        let options = self.options;

        let mut metadata = JsObject::new()
            .string_opt("selector", options.selector.as_deref())
            .raw_if(!options.standalone, "standalone", "false")
            .raw_if(options.standalone, "imports", "[]");

        metadata = if options.inline_template {
            metadata.raw(
                "template",
                format!("`\n    <p>\n      {} works!\n    </p>\n  `", names.file_name),
            )
        } else {
            metadata.string("templateUrl", format!("{}.html", names.import_path()))
        };

        if options.inline_style {
            if options.style != Style::None {
                metadata = metadata.raw("styles", "``");
            }
        } else if let Some(ext) = options.style.extension() {
            metadata = metadata.string("styleUrl", format!("{}.{}", names.import_path(), ext));
        }

        metadata.raw_if(
            options.on_push,
            "changeDetection",
            "ChangeDetectionStrategy.OnPush",
        )
    }
}

impl GeneratedFile for ComponentTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        let decorator = Decorator::new("Component").metadata(self.metadata());
        let class = class_block(&format!("export class {}", self.names.class_name), &[]);

        CodeFile::new()
            .import(
                Import::new("@angular/core")
                    .named_if(self.options.on_push, "ChangeDetectionStrategy")
                    .named("Component"),
            )
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

/// The component template, unless inlined.
pub struct ComponentTemplate<'a> {
    pub names: &'a ArtifactNames,
}

impl GeneratedFile for ComponentTemplate<'_> {
    fn path(&self) -> String {
        self.names.file(".html")
    }

    fn render(&self) -> String {
        format!("<p>{} works!</p>\n", self.names.file_name)
    }
}

/// The component stylesheet, unless inlined or disabled.
pub struct ComponentStyle<'a> {
    pub names: &'a ArtifactNames,
    pub style: Style,
}

impl ComponentStyle<'_> {
    pub fn for_options<'a>(
        names: &'a ArtifactNames,
        options: &ComponentOptions,
    ) -> Option<ComponentStyle<'a>> {
        options.has_style_file().then_some(ComponentStyle {
            names,
            style: options.style,
        })
    }
}

impl GeneratedFile for ComponentStyle<'_> {
    fn path(&self) -> String {
        let ext = self.style.extension().unwrap_or("css");
        self.names.file(&format!(".{}", ext))
    }

    fn render(&self) -> String {
        String::new()
    }
}

/// The component spec file.
pub struct ComponentSpec<'a> {
    pub names: &'a ArtifactNames,
    pub standalone: bool,
}

impl GeneratedFile for ComponentSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        let class = &self.names.class_name;
        let module_key = if self.standalone {
            "imports"
        } else {
            "declarations"
        };

        let body = format!(
            "describe('{class}', () => {{
  let component: {class};
  let fixture: ComponentFixture<{class}>;

  beforeEach(async () => {{
    await TestBed.configureTestingModule({{
      {module_key}: [{class}]
    }})
    .compileComponents();

    fixture = TestBed.createComponent({class});
    component = fixture.componentInstance;
    fixture.detectChanges();
  }});

  it('should create', () => {{
    expect(component).toBeTruthy();
  }});
}});"
        );

        CodeFile::new()
            .import(
                Import::new("@angular/core/testing")
                    .named("ComponentFixture")
                    .named("TestBed"),
            )
            .import(Import::new(self.names.import_path()).named(class))
            .add(body)
            .render()
    }
}
