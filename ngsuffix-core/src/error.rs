use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`Tree`](crate::Tree) operations.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("'{path}' already exists")]
    AlreadyExists { path: String },

    #[error("'{path}' does not exist")]
    NotFound { path: String },

    #[error("tree is not backed by a directory")]
    Detached,

    #[error("failed to access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
