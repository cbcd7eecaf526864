//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A step of the schematic pipeline.
///
/// Phases run in order over one [`GenerationContext`], mutating its tree and
/// recording what they did. Built-in phases, in order:
///
/// - `ResolvePhase` - merges workspace defaults under the caller options
/// - `PlanPhase` - derives the generated and canonical paths (COMPLEX kinds)
/// - `GeneratePhase` - invokes the external generator
/// - `NormalizePhase` - adds the missing symbol suffix (COMPLEX kinds)
/// - `RenamePhase` - moves files to dot-joined names (COMPLEX kinds)
pub trait Phase {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Absorbed conditions
    /// should be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
