//! Resolve phase - builds the effective option set.

use eyre::{Result, bail};
use tracing::debug;

use crate::{
    EffectiveOptions, config,
    naming::extract_base_name,
    pipeline::{GenerationContext, Phase},
};

/// Merges workspace defaults beneath the caller options.
///
/// Precedence, lowest first: workspace schematic defaults, project schematic
/// defaults, derived defaults (project prefix and source path), caller
/// options. SIMPLE kinds then have `type` forced to their symbol suffix.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let requested = ctx
            .input
            .get("project")
            .and_then(|value| value.as_str())
            .map(str::to_string);

        let manifest = config::load_manifest(ctx.tree);
        let (defaults, default_path) = match &manifest {
            Some(manifest) => {
                let defaults = config::resolve_defaults(manifest, ctx.kind, requested.as_deref());
                let default_path = manifest
                    .project(requested.as_deref())
                    .map(|(_, project)| project.default_path());
                (defaults, default_path)
            }
            None => Default::default(),
        };

        let mut options = EffectiveOptions::merge(defaults, &ctx.input);

        match options.name() {
            Some(name) if !extract_base_name(name).is_empty() => {}
            _ => bail!("option `name` is required to generate a {}", ctx.kind),
        }

        if let Some(path) = default_path {
            if !options.contains("path") {
                debug!(path = %path, "using project source path");
                ctx.add_info(self.name(), format!("using project path {}", path));
                options.set("path", path);
            }
        }

        if !ctx.kind.is_complex() {
            options.set("type", ctx.kind.symbol_suffix());
        }

        ctx.options = options;
        Ok(())
    }
}
