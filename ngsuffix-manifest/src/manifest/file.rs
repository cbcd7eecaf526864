use std::path::{Path, PathBuf};

use super::{RegisterOutcome, WorkspaceManifest, register_collection};
use crate::{Error, Result};

/// Represents an angular.json file with both raw content and parsed manifest.
pub struct WorkspaceFile {
    path: PathBuf,
    content: String,
    manifest: WorkspaceManifest,
}

impl WorkspaceFile {
    /// Open and parse an angular.json file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = WorkspaceManifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &WorkspaceManifest {
        &self.manifest
    }

    /// Update content and re-parse the manifest.
    pub fn set_content(&mut self, content: String) -> Result<()> {
        let filename = self.path.display().to_string();
        let manifest = WorkspaceManifest::from_str_with_filename(&content, &filename)?;
        self.content = content;
        self.manifest = manifest;
        Ok(())
    }

    /// Register this collection in `cli.schematicCollections`.
    ///
    /// Only updates the in-memory content; call [`WorkspaceFile::save`] to persist.
    pub fn register_collection(&mut self) -> Result<RegisterOutcome> {
        let filename = self.path.display().to_string();
        let (content, outcome) = register_collection(&self.content, &filename)?;
        self.set_content(content)?;
        Ok(outcome)
    }

    /// Save the current content to disk.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| Error::io(&self.path, e))?;
        Ok(())
    }
}
