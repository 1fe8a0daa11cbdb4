//! Verification of an existing tree against its declaration
//!
//! The walk is depth-first and pre-order: a directory is checked (existence,
//! then unexpected children) before its declared children, which are visited
//! in declared order. The first mismatch ends the walk.

use serde::Serialize;

use fstree_fs::{Filesystem, NormalizedPath, normalize_link_target};

use crate::{Entry, EntryTree, Error, FileEntry, LinkEntry, Result};

/// The first point where the filesystem disagrees with the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// Full path of the offending node
    pub path: String,
    /// What the declaration requires
    pub expected: String,
    /// What was found instead
    pub actual: String,
}

impl Difference {
    fn new(path: &NormalizedPath, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: expected {}, but {}", self.path, self.expected, self.actual)
    }
}

/// Outcome of checking one node: `Some` stops the walk.
type Step = Result<Option<Difference>>;

/// Compares filesystem trees with [`EntryTree`]s.
///
/// Read-only: it only stats, lists and reads.
#[derive(Debug, Clone)]
pub struct Checker<F> {
    fs: F,
}

impl<F: Filesystem> Checker<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Check the tree under `root` against `tree`.
    ///
    /// Returns `Ok(None)` when everything matches and `Ok(Some(difference))`
    /// for the first mismatch.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTree`] for an empty root path, [`Error::Fs`] when the
    /// filesystem fails to answer (unreadable directory, file or link).
    pub fn check(&self, root: &NormalizedPath, tree: &EntryTree) -> Result<Option<Difference>> {
        if root.is_empty() {
            return Err(Error::invalid_tree("root path must be set"));
        }

        tracing::info!(root = %root, "Checking tree");
        let difference = self.check_dir(root, tree.entries())?;

        match &difference {
            Some(difference) => tracing::debug!(%difference, "Tree differs"),
            None => tracing::info!(root = %root, "Tree matches"),
        }
        Ok(difference)
    }

    fn check_dir(&self, path: &NormalizedPath, entries: &[Entry]) -> Step {
        tracing::trace!(path = %path, "Checking directory");

        if !self.fs.is_dir(path) {
            let actual = if self.fs.exists(path) {
                "path isn't a directory"
            } else {
                "directory doesn't exist"
            };
            return Ok(Some(Difference::new(path, "directory exists", actual)));
        }

        if let Some(difference) = self.check_unexpected(path, entries)? {
            return Ok(Some(difference));
        }

        for entry in entries {
            let child = path.join(entry.name());
            let step = match entry {
                Entry::Directory(dir) => self.check_dir(&child, dir.entries()),
                Entry::File(file) => self.check_file(&child, file),
                Entry::Link(link) => self.check_link(&child, link),
            }?;

            if step.is_some() {
                return Ok(step);
            }
        }

        Ok(None)
    }

    /// Every real child must be declared.
    fn check_unexpected(&self, path: &NormalizedPath, entries: &[Entry]) -> Step {
        let existing = self.fs.list_children(path)?;

        let stray = existing
            .iter()
            .find(|name| !entries.iter().any(|entry| entry.name() == name.as_str()));

        Ok(stray.map(|name| Difference::new(&path.join(name), "path doesn't exist", "path exists")))
    }

    fn check_file(&self, path: &NormalizedPath, file: &FileEntry) -> Step {
        tracing::trace!(path = %path, "Checking file");

        if !self.fs.is_file(path) {
            let actual = if self.fs.exists(path) {
                "path isn't a file"
            } else {
                "file doesn't exist"
            };
            return Ok(Some(Difference::new(path, "file exists", actual)));
        }

        let Some(expected) = file.content() else {
            return Ok(None);
        };

        let real = self.fs.read_file(path)?;
        if real != expected {
            return Ok(Some(Difference::new(
                path,
                "file data is equal to expected data",
                "file data isn't equal to expected data",
            )));
        }

        Ok(None)
    }

    fn check_link(&self, path: &NormalizedPath, link: &LinkEntry) -> Step {
        tracing::trace!(path = %path, "Checking link");

        if !self.fs.is_link(path) {
            let actual = if self.fs.exists(path) {
                "path isn't a link"
            } else {
                "link doesn't exist"
            };
            return Ok(Some(Difference::new(path, "link exists", actual)));
        }

        let real = self.fs.read_link(path)?;
        if normalize_link_target(&real) != normalize_link_target(link.target()) {
            return Ok(Some(Difference::new(
                path,
                format!("link points to {}", link.target()),
                format!("link points to {real}"),
            )));
        }

        Ok(None)
    }
}

/// Check `root` against `tree` using `fs`.
///
/// Shorthand for [`Checker::new`] followed by [`Checker::check`].
pub fn verify(fs: impl Filesystem, root: impl Into<NormalizedPath>, tree: &EntryTree) -> Result<Option<Difference>> {
    Checker::new(fs).check(&root.into(), tree)
}
