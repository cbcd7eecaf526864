//! Generate operation - one schematic run against a workspace.

use std::path::Path;

use eyre::{Context, Result};
use ngsuffix_angular::Generator;
use ngsuffix_core::Tree;
use ngsuffix_manifest::OptionMap;
use ngsuffix_schematics::{ArtifactKind, Schematic, Severity};
use tracing::info;

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Workspace root holding angular.json.
    pub dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Stages every change over the workspace directory and only writes them
/// once the whole schematic has succeeded.
pub fn generate(
    kind: ArtifactKind,
    options: OptionMap,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let mut tree = Tree::from_dir(opts.dir);
    let outcome = Schematic::new(kind)
        .run(&mut tree, &Generator, options)
        .wrap_err_with(|| format!("failed to generate {}", kind))?;

    let mut warnings = Vec::new();
    for diagnostic in &outcome.diagnostics {
        match diagnostic.severity {
            Severity::Warning => warnings.push(match &diagnostic.path {
                Some(path) => format!("{} ({})", diagnostic.message, path),
                None => diagnostic.message.clone(),
            }),
            Severity::Info => info!("{}", diagnostic),
        }
    }

    let actions = if opts.dry_run {
        tree.actions()
    } else {
        tree.commit().wrap_err("failed to write generated files")?
    };

    Ok(GenerateReport {
        kind,
        name: outcome.options.name().unwrap_or_default().to_string(),
        dry_run: opts.dry_run,
        warnings,
        actions,
        renames: outcome.renames,
    })
}
