//! Error Types
//!
//! One variant per way a copy run can abort. Every variant is fatal.

use std::io;
use std::path::PathBuf;

/// Coarse error category, for callers that branch on the failure kind
/// without matching on the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Manifest,
    Copy,
    Output,
}

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Required environment variable is not set
    #[error("environment variable {var} is not set")]
    Config { var: &'static str },

    /// Manifest missing, unreadable, or failed mid-read
    #[error("failed to read manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A listed library could not be copied
    #[error("failed to copy library '{file}': {source}")]
    Copy {
        file: String,
        #[source]
        source: io::Error,
    },

    /// Progress line could not be written
    #[error("failed to write progress output: {0}")]
    Output(#[source] io::Error),
}

impl CopyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CopyError::Config { .. } => ErrorKind::Config,
            CopyError::Manifest { .. } => ErrorKind::Manifest,
            CopyError::Copy { .. } => ErrorKind::Copy,
            CopyError::Output(_) => ErrorKind::Output,
        }
    }

    pub(crate) fn copy(file: impl Into<String>, source: io::Error) -> Self {
        CopyError::Copy {
            file: file.into(),
            source,
        }
    }

    pub(crate) fn manifest(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CopyError::Manifest {
            path: path.into(),
            source,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CopyError>;
