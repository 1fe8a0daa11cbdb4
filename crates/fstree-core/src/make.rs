//! Idempotent materialization of an [`EntryTree`]
//!
//! Nodes that already match are left alone, missing nodes are created and
//! anything incompatible is a [`Error::Conflict`]. The walk stops at the
//! first error and does not undo what it already created.

use fstree_fs::{Filesystem, NormalizedPath, normalize_link_target};

use crate::{Entry, EntryTree, Error, FileEntry, LinkEntry, Result};

/// Builds filesystem trees from [`EntryTree`]s.
#[derive(Debug, Clone)]
pub struct Maker<F> {
    fs: F,
}

impl<F: Filesystem> Maker<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Create `tree` under `root`, creating `root` itself if needed.
    ///
    /// Running it again with the same tree changes nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTree`] if `root` is empty
    /// - [`Error::Conflict`] if a path is occupied by something incompatible
    /// - [`Error::Fs`] if the filesystem fails to read or write
    pub fn make(&self, root: &NormalizedPath, tree: &EntryTree) -> Result<()> {
        if root.is_empty() {
            return Err(Error::invalid_tree("root path must be set"));
        }

        tracing::info!(root = %root, "Making tree");
        self.make_dir(root, tree.entries())?;
        tracing::info!(root = %root, "Tree is in place");
        Ok(())
    }

    fn make_dir(&self, path: &NormalizedPath, entries: &[Entry]) -> Result<()> {
        if self.fs.is_dir(path) {
            tracing::trace!(path = %path, "Directory already exists");
        } else if self.fs.exists(path) {
            return Err(Error::conflict(path, "path already exists"));
        } else {
            self.fs.create_dir(path)?;
            tracing::debug!(path = %path, "Created directory");
        }

        for entry in entries {
            let child = path.join(entry.name());
            match entry {
                Entry::Directory(dir) => self.make_dir(&child, dir.entries())?,
                Entry::File(file) => self.make_file(&child, file)?,
                Entry::Link(link) => self.make_link(&child, link)?,
            }
        }

        Ok(())
    }

    fn make_file(&self, path: &NormalizedPath, file: &FileEntry) -> Result<()> {
        if self.fs.is_file(path) {
            let Some(expected) = file.content() else {
                tracing::trace!(path = %path, "File already exists");
                return Ok(());
            };

            let existing = self.fs.read_file(path)?;
            if existing != expected {
                return Err(Error::conflict(
                    path,
                    "file already exists with different content",
                ));
            }

            tracing::trace!(path = %path, "File already exists with expected content");
            return Ok(());
        }

        if self.fs.exists(path) {
            return Err(Error::conflict(path, "path already exists"));
        }

        self.fs.write_file(path, file.content().unwrap_or_default())?;
        tracing::debug!(path = %path, "Created file");
        Ok(())
    }

    fn make_link(&self, path: &NormalizedPath, link: &LinkEntry) -> Result<()> {
        if !self.fs.exists(path) {
            self.fs.create_symlink(path, link.target())?;
            tracing::debug!(path = %path, target = link.target(), "Created link");
            return Ok(());
        }

        if !self.fs.is_link(path) {
            return Err(Error::conflict(path, "path already exists"));
        }

        let existing = self.fs.read_link(path)?;
        if normalize_link_target(&existing) != normalize_link_target(link.target()) {
            return Err(Error::conflict(
                path,
                format!("link already exists and points to {existing}"),
            ));
        }

        tracing::trace!(path = %path, "Link already exists");
        Ok(())
    }
}

/// Create `tree` under `root` using `fs`.
///
/// Shorthand for [`Maker::new`] followed by [`Maker::make`].
pub fn materialize(fs: impl Filesystem, root: impl Into<NormalizedPath>, tree: &EntryTree) -> Result<()> {
    Maker::new(fs).make(&root.into(), tree)
}
