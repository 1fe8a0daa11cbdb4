//! The filesystem port
//!
//! Everything that reconciles an entry tree with storage goes through the
//! [`Filesystem`] trait, so the real OS and the in-memory double are
//! interchangeable.

use crate::{NormalizedPath, Result};

/// Capability interface required from any backing store.
///
/// Classification queries never follow symbolic links: a link to a directory
/// is a link, not a directory. The three classification methods are mutually
/// exclusive and all of them are `false` for a nonexistent path.
///
/// Paths are always passed fully joined; implementations do no path
/// interpretation beyond what the store itself requires.
pub trait Filesystem: Send + Sync {
    /// Whether anything (including a dangling link) exists at `path`.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Whether `path` is a regular file.
    fn is_file(&self, path: &NormalizedPath) -> bool;

    /// Whether `path` is a symbolic link.
    fn is_link(&self, path: &NormalizedPath) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &NormalizedPath) -> bool;

    /// Names of the entries inside the directory at `path`, sorted.
    ///
    /// Names that are not valid UTF-8 are returned lossily (invalid bytes
    /// become U+FFFD) rather than failing the listing.
    ///
    /// # Errors
    ///
    /// Fails if `path` is not a readable directory.
    fn list_children(&self, path: &NormalizedPath) -> Result<Vec<String>>;

    /// Full content of the file at `path`.
    fn read_file(&self, path: &NormalizedPath) -> Result<Vec<u8>>;

    /// Target of the symbolic link at `path`, exactly as stored.
    fn read_link(&self, path: &NormalizedPath) -> Result<String>;

    /// Create (or replace) the file at `path` with `data`.
    fn write_file(&self, path: &NormalizedPath, data: &[u8]) -> Result<()>;

    /// Create a symbolic link at `path` pointing to `target`.
    fn create_symlink(&self, path: &NormalizedPath, target: &str) -> Result<()>;

    /// Create a single directory at `path`. The parent must already exist.
    fn create_dir(&self, path: &NormalizedPath) -> Result<()>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn exists(&self, path: &NormalizedPath) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        (**self).is_file(path)
    }

    fn is_link(&self, path: &NormalizedPath) -> bool {
        (**self).is_link(path)
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        (**self).is_dir(path)
    }

    fn list_children(&self, path: &NormalizedPath) -> Result<Vec<String>> {
        (**self).list_children(path)
    }

    fn read_file(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn read_link(&self, path: &NormalizedPath) -> Result<String> {
        (**self).read_link(path)
    }

    fn write_file(&self, path: &NormalizedPath, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }

    fn create_symlink(&self, path: &NormalizedPath, target: &str) -> Result<()> {
        (**self).create_symlink(path, target)
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        (**self).create_dir(path)
    }
}
