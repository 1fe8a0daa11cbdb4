//! Error types for fstree-core

use fstree_fs::NormalizedPath;

/// Result type for fstree-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, materializing or verifying a tree
///
/// The variants fall into three families, see [`Error::is_config`],
/// [`Error::is_conflict`] and [`Error::is_io`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry tree or the root path is malformed
    #[error("Invalid tree: {message}")]
    InvalidTree { message: String },

    /// A node of the spec text could not be understood
    #[error("Unable to parse {path}: {message}")]
    InvalidSpec { path: String, message: String },

    /// The spec text is not valid YAML
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The spec file has an extension we do not know how to read
    #[error("Unsupported spec format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Something incompatible already occupies a path that must be created
    #[error("Conflict at {path}: {reason}")]
    Conflict { path: NormalizedPath, reason: String },

    /// Filesystem error from fstree-fs
    #[error(transparent)]
    Fs(#[from] fstree_fs::Error),
}

impl Error {
    pub(crate) fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_spec(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn conflict(path: &NormalizedPath, reason: impl Into<String>) -> Self {
        Self::Conflict {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    /// Malformed input: bad tree, bad spec text, empty root path.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidTree { .. } | Self::InvalidSpec { .. } | Self::Yaml(_) | Self::UnsupportedFormat { .. }
        )
    }

    /// An existing node is incompatible with the declaration.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// The storage failed to answer a query or apply a write.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Fs(_))
    }
}
