//! Error types for fstree-fs

use std::path::PathBuf;

/// Result type for fstree-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a filesystem backend
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Symbolic links are not supported on this platform: {path}")]
    SymlinkUnsupported { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying [`std::io::ErrorKind`], if this is a plain I/O error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// The path the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::LockFailed { path } | Self::SymlinkUnsupported { path } => {
                path
            }
        }
    }
}
