use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("failed to {operation} {}: {source}", path.display())]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    /// Builds a closure suitable for `map_err` that tags an I/O error with
    /// the operation and path that produced it.
    pub fn filesystem(operation: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| OrganizeError::Filesystem {
            operation,
            path,
            source,
        }
    }

    /// Path involved in a filesystem failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            OrganizeError::Filesystem { path, .. } => Some(path),
            OrganizeError::Configuration(_) => None,
        }
    }
}
