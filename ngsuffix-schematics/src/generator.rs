//! The boundary to the wrapped content generator.

use eyre::Result;
use ngsuffix_core::Tree;

use crate::EffectiveOptions;

/// A generator that writes the files of one artifact into a tree.
///
/// Implementations follow their own naming conventions; the schematic
/// pipeline normalizes the result afterwards.
pub trait ExternalGenerator {
    /// Populate `tree` with the artifact `kind` from `collection`.
    fn generate(
        &self,
        tree: &mut Tree,
        collection: &str,
        kind: &str,
        options: &EffectiveOptions,
    ) -> Result<()>;
}

impl<F> ExternalGenerator for F
where
    F: Fn(&mut Tree, &str, &str, &EffectiveOptions) -> Result<()>,
{
    fn generate(
        &self,
        tree: &mut Tree,
        collection: &str,
        kind: &str,
        options: &EffectiveOptions,
    ) -> Result<()> {
        self(tree, collection, kind, options)
    }
}
