//! Init command report.

use std::path::PathBuf;

use ngsuffix_manifest::{COLLECTION_ID, RegisterOutcome};

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub manifest_path: PathBuf,
    pub outcome: RegisterOutcome,
    /// `cli.schematicCollections` after the edit.
    pub collections: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.manifest_path.display().to_string();
        match self.outcome {
            RegisterOutcome::Added => {
                out.key_value(&format!("Registered {}", COLLECTION_ID), &path);
            }
            RegisterOutcome::AlreadyConfigured => {
                out.key_value(&format!("{} is already registered", COLLECTION_ID), &path);
            }
        }

        out.section("Schematic collections");
        for (i, collection) in self.collections.iter().enumerate() {
            out.numbered_item(i + 1, collection);
        }
    }
}
