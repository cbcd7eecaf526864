//! Rename phase - moves generated files to dot-joined names.

use eyre::Result;

use crate::{
    pipeline::{GenerationContext, Phase},
    rename::rename_to_canonical,
};

pub struct RenamePhase;

impl Phase for RenamePhase {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let Some(main_file) = ctx.paths.as_ref().map(|p| p.main_file.clone()) else {
            return Ok(());
        };

        let base_name = ctx.base_name().to_string();
        let renames = rename_to_canonical(ctx.tree, &main_file, &base_name, ctx.kind.file_suffix())?;
        ctx.renames.extend(renames);
        Ok(())
    }
}
