//! Schematic orchestrator.

use eyre::Result;
use ngsuffix_core::Tree;
use ngsuffix_manifest::OptionMap;
use serde::Serialize;
use tracing::{debug, info_span};

use super::{
    Diagnostic, GenerationContext, Phase,
    phases::{GeneratePhase, NormalizePhase, PlanPhase, RenamePhase, ResolvePhase},
};
use crate::{ArtifactKind, EffectiveOptions, ExternalGenerator, GeneratedArtifactPaths, Rename};

/// What one schematic run did, besides the tree changes themselves.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub kind: ArtifactKind,
    pub options: EffectiveOptions,
    pub paths: Option<GeneratedArtifactPaths>,
    /// Files whose exported symbol was rewritten.
    pub rewritten: Vec<String>,
    pub renames: Vec<Rename>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The generation pipeline for one artifact kind.
///
/// SIMPLE kinds run `resolve → generate`. COMPLEX kinds run
/// `resolve → plan → generate → normalize → rename`. Extra phases added with
/// [`Schematic::phase`] run after the built-in ones.
///
/// # Example
///
/// ```
/// use ngsuffix_core::Tree;
/// use ngsuffix_manifest::OptionMap;
/// use ngsuffix_schematics::{ArtifactKind, EffectiveOptions, Schematic};
///
/// let generator = |tree: &mut Tree, _: &str, _: &str, _: &EffectiveOptions| -> eyre::Result<()> {
///     tree.create("src/app/fmt/fmt-pipe.ts", "export class Fmt {}")?;
///     Ok(())
/// };
///
/// let mut options = OptionMap::new();
/// options.insert("name".into(), "fmt".into());
///
/// let mut tree = Tree::empty();
/// Schematic::new(ArtifactKind::Pipe).run(&mut tree, &generator, options)?;
///
/// assert_eq!(
///     tree.read("src/app/fmt/fmt.pipe.ts")?.as_deref(),
///     Some("export class FmtPipe {}")
/// );
/// # Ok::<(), eyre::Report>(())
/// ```
pub struct Schematic {
    kind: ArtifactKind,
    phases: Vec<Box<dyn Phase>>,
}

impl Schematic {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            phases: Vec::new(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the schematic over `tree` with the caller's `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is missing, the generator fails, or a
    /// tree operation is rejected.
    pub fn run(
        &self,
        tree: &mut Tree,
        generator: &dyn ExternalGenerator,
        options: OptionMap,
    ) -> Result<GenerationOutcome> {
        let span = info_span!("schematic", kind = %self.kind);
        let _guard = span.enter();

        let mut ctx = GenerationContext::new(tree, self.kind, options);

        let generate = GeneratePhase::new(generator);
        let builtin: Vec<&dyn Phase> = if self.kind.is_complex() {
            vec![
                &ResolvePhase,
                &PlanPhase,
                &generate,
                &NormalizePhase,
                &RenamePhase,
            ]
        } else {
            vec![&ResolvePhase, &generate]
        };

        for phase in builtin {
            run_phase(phase, &mut ctx)?;
        }
        for phase in &self.phases {
            run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(GenerationOutcome {
            kind: self.kind,
            options: ctx.options,
            paths: ctx.paths,
            rewritten: ctx.rewritten,
            renames: ctx.renames,
            diagnostics: ctx.diagnostics,
        })
    }
}

fn run_phase(phase: &dyn Phase, ctx: &mut GenerationContext<'_>) -> Result<()> {
    debug!(phase = phase.name(), "running phase");
    phase.run(ctx)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use serde_json::{Value, json};

    use super::*;
    use crate::testing::{MockGenerator, tree_with_manifest};

    fn input(value: Value) -> OptionMap {
        serde_json::from_value(value).unwrap()
    }

    struct CountingPhase(Arc<AtomicUsize>);

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            ctx.add_info(self.name(), "counted");
            Ok(())
        }
    }

    #[test]
    fn test_simple_kind_skips_normalization() {
        let mut tree = Tree::empty();
        let generator = |tree: &mut Tree, _: &str, _: &str, _: &EffectiveOptions| -> Result<()> {
            tree.create("src/app/cart/cart.ts", "export class Cart {}")?;
            Ok(())
        };

        let outcome = Schematic::new(ArtifactKind::Service)
            .run(&mut tree, &generator, input(json!({ "name": "cart" })))
            .unwrap();

        assert!(outcome.paths.is_none());
        assert!(outcome.renames.is_empty());
        assert_eq!(
            tree.read("src/app/cart/cart.ts").unwrap().as_deref(),
            Some("export class Cart {}")
        );
    }

    #[test]
    fn test_generator_sees_effective_options() {
        let seen = RefCell::new(None);
        let generator = |_: &mut Tree, collection: &str, kind: &str, options: &EffectiveOptions| -> Result<()> {
            *seen.borrow_mut() = Some((collection.to_string(), kind.to_string(), options.clone()));
            Ok(())
        };

        let mut tree = Tree::empty();
        Schematic::new(ArtifactKind::Component)
            .run(&mut tree, &generator, input(json!({ "name": "card" })))
            .unwrap();

        let (collection, kind, options) = seen.into_inner().unwrap();
        assert_eq!(collection, "@schematics/angular");
        assert_eq!(kind, "component");
        assert_eq!(options.str("type"), Some("Component"));
    }

    #[test]
    fn test_generator_error_propagates() {
        let generator = |_: &mut Tree, _: &str, _: &str, _: &EffectiveOptions| -> Result<()> {
            Err(eyre::eyre!("template missing"))
        };

        let mut tree = Tree::empty();
        let err = Schematic::new(ArtifactKind::Pipe)
            .run(&mut tree, &generator, input(json!({ "name": "fmt" })))
            .unwrap_err();

        assert_eq!(err.to_string(), "@schematics/angular:pipe generator failed");
    }

    #[test]
    fn test_missing_output_is_a_warning() {
        let generator = |_: &mut Tree, _: &str, _: &str, _: &EffectiveOptions| -> Result<()> { Ok(()) };

        let mut tree = Tree::empty();
        let outcome = Schematic::new(ArtifactKind::Guard)
            .run(&mut tree, &generator, input(json!({ "name": "role" })))
            .unwrap();

        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(
            outcome.diagnostics[0].path.as_deref(),
            Some("src/app/role/role-guard.ts")
        );
        assert!(tree.actions().is_empty());
    }

    #[test]
    fn test_custom_phase_runs_last() {
        let count = Arc::new(AtomicUsize::new(0));
        let generator = |_: &mut Tree, _: &str, _: &str, _: &EffectiveOptions| -> Result<()> { Ok(()) };

        let schematic = Schematic::new(ArtifactKind::Directive).phase(CountingPhase(count.clone()));

        let mut tree = Tree::empty();
        let outcome = schematic
            .run(&mut tree, &generator, input(json!({ "name": "tip" })))
            .unwrap();
        schematic
            .run(&mut tree, &generator, input(json!({ "name": "tip" })))
            .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(outcome.diagnostics.last().unwrap().phase, "counting");
    }

    #[test]
    fn test_complex_kind_end_to_end() {
        let mut tree = Tree::empty();
        let outcome = Schematic::new(ArtifactKind::Guard)
            .run(&mut tree, &MockGenerator, input(json!({ "name": "role" })))
            .unwrap();

        assert_eq!(
            tree.files(),
            vec!["src/app/role/role.guard.spec.ts", "src/app/role/role.guard.ts"]
        );
        assert_eq!(
            tree.read("src/app/role/role.guard.ts").unwrap().as_deref(),
            Some("export class RoleGuard {}\n")
        );
        assert_eq!(
            tree.read("src/app/role/role.guard.spec.ts").unwrap().as_deref(),
            Some("import * as subject from './role.guard';\n")
        );
        assert_eq!(outcome.rewritten, vec!["src/app/role/role-guard.ts"]);
        assert_eq!(outcome.renames.len(), 2);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_complex_kind_uses_project_path() {
        let mut tree = tree_with_manifest(&json!({
            "projects": {
                "shop": { "root": "projects/shop", "schematics": { "pipe": { "skipTests": true } } }
            }
        }));

        let outcome = Schematic::new(ArtifactKind::Pipe)
            .run(
                &mut tree,
                &MockGenerator,
                input(json!({ "name": "ui/Price_Tag", "project": "shop", "flat": true })),
            )
            .unwrap();

        assert_eq!(
            outcome.paths.unwrap().canonical_main_file,
            "projects/shop/src/app/ui/price-tag.pipe.ts"
        );
        assert_eq!(
            tree.files(),
            vec!["angular.json", "projects/shop/src/app/ui/price-tag.pipe.ts"]
        );
    }
}
