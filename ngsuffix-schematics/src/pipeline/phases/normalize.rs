//! Normalize phase - fixes the exported symbol name.

use eyre::Result;

use crate::{
    pipeline::{Diagnostic, GenerationContext, Phase},
    suffix::ensure_class_suffix,
};

/// Adds the kind's symbol suffix to the generated main file.
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let Some(main_file) = ctx.paths.as_ref().map(|p| p.main_file.clone()) else {
            return Ok(());
        };

        if !ctx.tree.exists(&main_file) {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "generator did not write the expected file")
                    .at(&main_file),
            );
            return Ok(());
        }

        let base_name = ctx.base_name().to_string();
        if ensure_class_suffix(ctx.tree, &main_file, &base_name, ctx.kind.symbol_suffix())? {
            ctx.rewritten.push(main_file);
        }
        Ok(())
    }
}
