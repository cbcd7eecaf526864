use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{TreeError, utils::normalize_path};

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// A staged change to a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Created(String),
    Overwritten(String),
    Deleted,
}

/// Kind of change recorded by a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Path did not exist before
    Create,
    /// Existing path was replaced
    Overwrite,
    /// Existing path was removed
    Delete,
}

/// A staged change, as reported by [`Tree::actions`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub path: String,
    pub content: Option<String>,
}

/// A file tree that stages changes in memory.
///
/// A tree is either empty (purely in memory) or backed by a directory, in
/// which case reads of untouched paths fall through to disk. Nothing is
/// written to disk until [`Tree::commit`] is called.
///
/// All paths are normalized with [`normalize_path`], so `/src/app/a.ts`,
/// `./src/app/a.ts` and `src/app/a.ts` address the same file.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<PathBuf>,
    staged: BTreeMap<String, Entry>,
}

impl Tree {
    /// Create an empty in-memory tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a tree staged over the given directory.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            staged: BTreeMap::new(),
        }
    }

    /// Check whether a file is visible at `path`.
    pub fn exists(&self, path: &str) -> bool {
        let path = normalize_path(path);
        match self.staged.get(&path) {
            Some(Entry::Deleted) => false,
            Some(_) => true,
            None => self.on_disk(&path),
        }
    }

    /// Read the content at `path`, or `None` if no file is there.
    pub fn read(&self, path: &str) -> Result<Option<String>> {
        let path = normalize_path(path);
        match self.staged.get(&path) {
            Some(Entry::Created(content) | Entry::Overwritten(content)) => Ok(Some(content.clone())),
            Some(Entry::Deleted) => Ok(None),
            None => self.read_disk(&path),
        }
    }

    /// Create a new file. Fails if a file is already visible at `path`.
    pub fn create(&mut self, path: &str, content: impl Into<String>) -> Result<()> {
        let path = normalize_path(path);
        if self.exists(&path) {
            return Err(TreeError::AlreadyExists { path });
        }

        // Re-creating a deleted disk file replaces it
        let entry = if self.on_disk(&path) {
            Entry::Overwritten(content.into())
        } else {
            Entry::Created(content.into())
        };
        debug!(path = %path, "create");
        self.staged.insert(path, entry);
        Ok(())
    }

    /// Replace the content of an existing file.
    pub fn overwrite(&mut self, path: &str, content: impl Into<String>) -> Result<()> {
        let path = normalize_path(path);
        let entry = match self.staged.get(&path) {
            Some(Entry::Created(_)) => Entry::Created(content.into()),
            Some(Entry::Overwritten(_)) => Entry::Overwritten(content.into()),
            Some(Entry::Deleted) => return Err(TreeError::NotFound { path }),
            None if self.on_disk(&path) => Entry::Overwritten(content.into()),
            None => return Err(TreeError::NotFound { path }),
        };
        debug!(path = %path, "overwrite");
        self.staged.insert(path, entry);
        Ok(())
    }

    /// Delete an existing file.
    pub fn delete(&mut self, path: &str) -> Result<()> {
        let path = normalize_path(path);
        match self.staged.get(&path) {
            Some(Entry::Created(_)) => {
                self.staged.remove(&path);
            }
            Some(Entry::Overwritten(_)) => {
                self.staged.insert(path.clone(), Entry::Deleted);
            }
            Some(Entry::Deleted) => return Err(TreeError::NotFound { path }),
            None if self.on_disk(&path) => {
                self.staged.insert(path.clone(), Entry::Deleted);
            }
            None => return Err(TreeError::NotFound { path }),
        }
        debug!(path = %path, "delete");
        Ok(())
    }

    /// Paths of every file written through this tree, sorted.
    ///
    /// Untouched files of a directory-backed tree are not listed.
    pub fn files(&self) -> Vec<String> {
        self.staged
            .iter()
            .filter(|(_, entry)| !matches!(entry, Entry::Deleted))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Staged changes in path order.
    pub fn actions(&self) -> Vec<Action> {
        self.staged
            .iter()
            .map(|(path, entry)| {
                let (kind, content) = match entry {
                    Entry::Created(c) => (ActionKind::Create, Some(c.clone())),
                    Entry::Overwritten(c) => (ActionKind::Overwrite, Some(c.clone())),
                    Entry::Deleted => (ActionKind::Delete, None),
                };
                Action {
                    kind,
                    path: path.clone(),
                    content,
                }
            })
            .collect()
    }

    /// Write all staged changes to the backing directory.
    pub fn commit(&self) -> Result<Vec<Action>> {
        let root = self.root.as_deref().ok_or(TreeError::Detached)?;
        let actions = self.actions();

        for action in &actions {
            let full = root.join(&action.path);
            match (&action.kind, &action.content) {
                (ActionKind::Delete, _) => {
                    fs::remove_file(&full).map_err(|source| TreeError::Io {
                        path: full.clone(),
                        source,
                    })?;
                }
                (_, Some(content)) => write_file(&full, content)?,
                (_, None) => {}
            }
        }

        Ok(actions)
    }

    fn on_disk(&self, path: &str) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| !path.is_empty() && root.join(path).is_file())
    }

    fn read_disk(&self, path: &str) -> Result<Option<String>> {
        if !self.on_disk(path) {
            return Ok(None);
        }
        let Some(root) = &self.root else {
            return Ok(None);
        };
        let full = root.join(path);
        fs::read_to_string(&full)
            .map(Some)
            .map_err(|source| TreeError::Io { path: full, source })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, content).map_err(io_err)?;
    Ok(())
}
