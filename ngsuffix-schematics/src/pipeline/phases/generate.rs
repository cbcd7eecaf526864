//! Generate phase - hands the effective options to the external generator.

use eyre::{Result, WrapErr};
use ngsuffix_manifest::UPSTREAM_COLLECTION;
use tracing::debug;

use crate::{
    ExternalGenerator,
    pipeline::{GenerationContext, Phase},
};

pub struct GeneratePhase<'g> {
    generator: &'g dyn ExternalGenerator,
}

impl<'g> GeneratePhase<'g> {
    pub fn new(generator: &'g dyn ExternalGenerator) -> Self {
        Self { generator }
    }
}

impl Phase for GeneratePhase<'_> {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let kind = ctx.kind.name();
        debug!(collection = UPSTREAM_COLLECTION, kind, "invoking generator");

        self.generator
            .generate(ctx.tree, UPSTREAM_COLLECTION, kind, &ctx.options)
            .wrap_err_with(|| format!("{}:{} generator failed", UPSTREAM_COLLECTION, kind))
    }
}
