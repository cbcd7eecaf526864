use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::Result;
use ngsuffix_manifest::OptionMap;
use ngsuffix_schematics::ArtifactKind;
use serde_json::Value;

use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Workspace directory containing angular.json
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Preview changes without writing to disk
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub kind: KindCommand,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::generate(
            self.kind.kind(),
            self.kind.options(),
            GenerateOptions {
                dir: &self.dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

#[derive(Subcommand)]
pub enum KindCommand {
    /// Generate a component
    #[command(alias = "c")]
    Component(ComponentArgs),

    /// Generate a directive
    #[command(alias = "d")]
    Directive(DirectiveArgs),

    /// Generate a service
    #[command(alias = "s")]
    Service(ServiceArgs),

    /// Generate a pipe
    #[command(alias = "p")]
    Pipe(PipeArgs),

    /// Generate a route guard
    #[command(alias = "g")]
    Guard(GuardArgs),

    /// Generate an HTTP interceptor
    Interceptor(FunctionalArgs),

    /// Generate a route resolver
    #[command(alias = "r")]
    Resolver(FunctionalArgs),
}

impl KindCommand {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            KindCommand::Component(_) => ArtifactKind::Component,
            KindCommand::Directive(_) => ArtifactKind::Directive,
            KindCommand::Service(_) => ArtifactKind::Service,
            KindCommand::Pipe(_) => ArtifactKind::Pipe,
            KindCommand::Guard(_) => ArtifactKind::Guard,
            KindCommand::Interceptor(_) => ArtifactKind::Interceptor,
            KindCommand::Resolver(_) => ArtifactKind::Resolver,
        }
    }

    /// Caller options for the schematic. Flags left unset are omitted so
    /// that workspace defaults still apply.
    pub fn options(&self) -> OptionMap {
        let mut options = OptionMap::new();
        let args: &dyn KindArgs = match self {
            KindCommand::Component(args) => args,
            KindCommand::Directive(args) => args,
            KindCommand::Service(args) => args,
            KindCommand::Pipe(args) => args,
            KindCommand::Guard(args) => args,
            KindCommand::Interceptor(args) | KindCommand::Resolver(args) => args,
        };
        args.common().extend(&mut options);
        args.extend(&mut options);
        options
    }
}

trait KindArgs {
    fn common(&self) -> &CommonArgs;

    fn extend(&self, _options: &mut OptionMap) {}
}

fn set(options: &mut OptionMap, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        options.insert(key.to_string(), value.into());
    }
}

/// Options every kind accepts.
#[derive(Args)]
pub struct CommonArgs {
    /// Artifact name, optionally prefixed with sub-folders (e.g. `features/admin/dashboard`)
    pub name: String,

    /// Project to generate into
    #[arg(long)]
    pub project: Option<String>,

    /// Folder the artifact is created under, relative to the workspace
    #[arg(long)]
    pub path: Option<String>,

    /// Create files directly in the target folder instead of a sub-folder
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub flat: Option<bool>,

    /// Do not create a spec file
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_tests: Option<bool>,
}

impl CommonArgs {
    fn extend(&self, options: &mut OptionMap) {
        set(options, "name", Some(self.name.as_str()));
        set(options, "project", self.project.as_deref());
        set(options, "path", self.path.as_deref());
        set(options, "flat", self.flat);
        set(options, "skipTests", self.skip_tests);
    }
}

/// Declaration options shared by components, directives and pipes.
#[derive(Args)]
pub struct DeclarationArgs {
    /// Emit a standalone declaration
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub standalone: Option<bool>,

    /// Export the declaration from its NgModule
    #[arg(long)]
    pub export: bool,

    /// Do not import the declaration into an NgModule
    #[arg(long)]
    pub skip_import: bool,
}

impl DeclarationArgs {
    fn extend(&self, options: &mut OptionMap) {
        set(options, "standalone", self.standalone);
        set(options, "export", self.export.then_some(true));
        set(options, "skipImport", self.skip_import.then_some(true));
    }
}

#[derive(Args)]
pub struct ComponentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub declaration: DeclarationArgs,

    /// Selector prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Explicit HTML selector
    #[arg(long)]
    pub selector: Option<String>,

    /// Omit the selector
    #[arg(long)]
    pub skip_selector: bool,

    /// Style file format
    #[arg(long, value_parser = ["css", "scss", "sass", "less", "none"])]
    pub style: Option<String>,

    /// Put the template in the component file
    #[arg(long)]
    pub inline_template: bool,

    /// Put the styles in the component file
    #[arg(long)]
    pub inline_style: bool,

    /// Change detection strategy
    #[arg(long, value_parser = ["Default", "OnPush"])]
    pub change_detection: Option<String>,
}

impl KindArgs for ComponentArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn extend(&self, options: &mut OptionMap) {
        self.declaration.extend(options);
        set(options, "prefix", self.prefix.as_deref());
        set(options, "selector", self.selector.as_deref());
        set(options, "skipSelector", self.skip_selector.then_some(true));
        set(options, "style", self.style.as_deref());
        set(options, "inlineTemplate", self.inline_template.then_some(true));
        set(options, "inlineStyle", self.inline_style.then_some(true));
        set(options, "changeDetection", self.change_detection.as_deref());
    }
}

#[derive(Args)]
pub struct DirectiveArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub declaration: DeclarationArgs,

    /// Selector prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Explicit attribute selector
    #[arg(long)]
    pub selector: Option<String>,
}

impl KindArgs for DirectiveArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn extend(&self, options: &mut OptionMap) {
        self.declaration.extend(options);
        set(options, "prefix", self.prefix.as_deref());
        set(options, "selector", self.selector.as_deref());
    }
}

#[derive(Args)]
pub struct ServiceArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl KindArgs for ServiceArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }
}

#[derive(Args)]
pub struct PipeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub declaration: DeclarationArgs,
}

impl KindArgs for PipeArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn extend(&self, options: &mut OptionMap) {
        self.declaration.extend(options);
    }
}

#[derive(Args)]
pub struct GuardArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a guard function instead of a class
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub functional: Option<bool>,

    /// Router interfaces to implement
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = ["CanActivate", "CanActivateChild", "CanDeactivate", "CanMatch"]
    )]
    pub implements: Vec<String>,
}

impl KindArgs for GuardArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn extend(&self, options: &mut OptionMap) {
        set(options, "functional", self.functional);
        if !self.implements.is_empty() {
            set(options, "implements", Some(self.implements.clone()));
        }
    }
}

/// Arguments of kinds that come as a function or a class.
#[derive(Args)]
pub struct FunctionalArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a function instead of a class
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub functional: Option<bool>,
}

impl KindArgs for FunctionalArgs {
    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn extend(&self, options: &mut OptionMap) {
        set(options, "functional", self.functional);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        kind: KindCommand,
    }

    fn parse(args: &[&str]) -> KindCommand {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).kind
    }

    #[test]
    fn test_unset_flags_are_omitted() {
        let cmd = parse(&["guard", "role"]);

        assert_eq!(cmd.kind(), ArtifactKind::Guard);
        let options = cmd.options();
        assert_eq!(options.len(), 1);
        assert_eq!(options["name"], json!("role"));
    }

    #[test]
    fn test_aliases_and_flags() {
        let cmd = parse(&[
            "c",
            "features/admin/dashboard",
            "--flat",
            "--skip-tests=false",
            "--style",
            "scss",
            "--change-detection",
            "OnPush",
        ]);

        assert_eq!(cmd.kind(), ArtifactKind::Component);
        let options = cmd.options();
        assert_eq!(options["flat"], json!(true));
        assert_eq!(options["skipTests"], json!(false));
        assert_eq!(options["style"], json!("scss"));
        assert_eq!(options["changeDetection"], json!("OnPush"));
    }

    #[test]
    fn test_guard_implements() {
        let options = parse(&[
            "g",
            "role",
            "--functional=false",
            "--implements",
            "CanActivate,CanMatch",
        ])
        .options();

        assert_eq!(options["functional"], json!(false));
        assert_eq!(options["implements"], json!(["CanActivate", "CanMatch"]));
    }

    #[test]
    fn test_resolver_alias() {
        assert_eq!(parse(&["r", "user"]).kind(), ArtifactKind::Resolver);
        assert_eq!(parse(&["interceptor", "auth"]).kind(), ArtifactKind::Interceptor);
    }
}
