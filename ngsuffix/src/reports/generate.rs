//! Generate command report.

use ngsuffix_core::{Action, ActionKind};
use ngsuffix_schematics::{ArtifactKind, Rename};

use super::output::{Output, Report};

/// Report data from one schematic run.
#[derive(Debug)]
pub struct GenerateReport {
    pub kind: ArtifactKind,
    /// The `name` option as given.
    pub name: String,
    pub dry_run: bool,
    /// Conditions the pipeline absorbed.
    pub warnings: Vec<String>,
    /// Changes written, or that would be written on a dry run.
    pub actions: Vec<Action>,
    /// Generated files moved to their canonical names.
    pub renames: Vec<Rename>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        out.section(&format!("Generated {} '{}'", self.kind, self.name));
        self.render_actions(out);

        if !self.renames.is_empty() {
            out.newline();
            out.section("Renamed");
            for rename in &self.renames {
                out.list_item(&format!("{} -> {}", rename.from, rename.to));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for action in &self.actions {
            if let Some(content) = &action.content {
                out.divider(&action.path);
                out.preformatted(content.trim_end());
            }
        }

        out.divider("Summary");
        self.render_actions(out);
        out.newline();
        out.preformatted("Dry run: no files were written");
    }

    fn render_actions(&self, out: &mut dyn Output) {
        for action in &self.actions {
            match action.kind {
                ActionKind::Create => out.added_item(&action.path),
                ActionKind::Overwrite => out.updated_item(&action.path),
                ActionKind::Delete => out.removed_item(&action.path),
            }
        }
    }
}
