//! Init operation - collection registration.

use ngsuffix_manifest::{Result, WorkspaceFile};

use crate::reports::InitReport;

/// Register the collection in the workspace manifest.
///
/// The file is only rewritten when something was added.
pub fn init(file: &mut WorkspaceFile) -> Result<InitReport> {
    let outcome = file.register_collection()?;
    if outcome == ngsuffix_manifest::RegisterOutcome::Added {
        file.save()?;
    }

    Ok(InitReport {
        manifest_path: file.path().to_path_buf(),
        outcome,
        collections: file.manifest().schematic_collections().to_vec(),
    })
}
