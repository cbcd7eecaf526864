//! Plan phase - computes artifact paths before generation.

use eyre::Result;

use crate::{
    GeneratedArtifactPaths,
    pipeline::{GenerationContext, Phase},
};

/// Derives where the generator will write and where the files should end up.
///
/// The paths are computed once, from the effective options, and reused by
/// the later phases unchanged.
pub struct PlanPhase;

impl Phase for PlanPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let options = &ctx.options;
        let paths = GeneratedArtifactPaths::new(
            options.name().unwrap_or_default(),
            options.path(),
            ctx.kind.file_suffix(),
            options.flat(),
        );
        ctx.paths = Some(paths);
        Ok(())
    }
}
