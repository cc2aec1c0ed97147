use std::{io, path::PathBuf};

use thiserror::Error;

/// Per-file failure while reading status for a single path.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error accessing file {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InspectError {
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => InspectError::NotFound { path },
            _ => InspectError::Access { path, source },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            InspectError::NotFound { path } | InspectError::Access { path, .. } => path,
        }
    }
}

/// A directory (or one of its entries) could not be listed during a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Error accessing directory: {source}")]
    DirectoryAccess {
        #[source]
        source: ignore::Error,
    },
}

impl From<ignore::Error> for WalkError {
    fn from(source: ignore::Error) -> Self {
        WalkError::DirectoryAccess { source }
    }
}
