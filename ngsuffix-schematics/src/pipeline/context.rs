//! Generation context passed through pipeline phases.

use ngsuffix_core::Tree;
use ngsuffix_manifest::OptionMap;

use super::diagnostic::Diagnostic;
use crate::{ArtifactKind, EffectiveOptions, GeneratedArtifactPaths, Rename};

/// State of one generation run.
///
/// The tree is borrowed for the whole run; every phase mutates it in place.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    pub tree: &'a mut Tree,
    pub kind: ArtifactKind,
    /// Options exactly as given by the caller.
    pub input: OptionMap,
    /// Merged options (populated by ResolvePhase).
    pub options: EffectiveOptions,
    /// Paths computed before generation (populated by PlanPhase).
    pub paths: Option<GeneratedArtifactPaths>,
    /// Files whose exported symbol was rewritten.
    pub rewritten: Vec<String>,
    /// Files moved to their canonical names.
    pub renames: Vec<Rename>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(tree: &'a mut Tree, kind: ArtifactKind, input: OptionMap) -> Self {
        Self {
            tree,
            kind,
            input,
            options: EffectiveOptions::default(),
            paths: None,
            rewritten: Vec::new(),
            renames: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// The base name of the artifact being generated.
    pub fn base_name(&self) -> &str {
        self.options
            .name()
            .map(crate::naming::extract_base_name)
            .unwrap_or_default()
    }
}
