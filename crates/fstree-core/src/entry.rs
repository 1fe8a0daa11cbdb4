//! The entry tree: an in-memory description of a desired layout
//!
//! Trees are validated once, in [`EntryTree::new`], and are read-only
//! afterwards. Both [`crate::Maker`] and [`crate::Checker`] only borrow them.

use std::collections::HashSet;

use crate::{Error, Result};

/// One node of a declared layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(DirectoryEntry),
    File(FileEntry),
    Link(LinkEntry),
}

impl Entry {
    /// A directory with the given children.
    pub fn directory(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self::Directory(DirectoryEntry::new(name, entries))
    }

    /// A file whose content is not checked (and is written empty).
    pub fn file(name: impl Into<String>) -> Self {
        Self::File(FileEntry::new(name, None))
    }

    /// A file with declared content.
    pub fn file_with_content(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::File(FileEntry::new(name, Some(content.into())))
    }

    /// A symbolic link pointing to `target`.
    pub fn link(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link(LinkEntry::new(name, target))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.name(),
            Self::Link(link) => link.name(),
        }
    }
}

/// A directory and its children, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: String,
    entries: Vec<Entry>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// A regular file. `None` content means "any content".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    content: Option<Vec<u8>>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, content: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}

/// A symbolic link. The target is not required to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    name: String,
    target: String,
}

impl LinkEntry {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl From<DirectoryEntry> for Entry {
    fn from(dir: DirectoryEntry) -> Self {
        Self::Directory(dir)
    }
}

impl From<FileEntry> for Entry {
    fn from(file: FileEntry) -> Self {
        Self::File(file)
    }
}

impl From<LinkEntry> for Entry {
    fn from(link: LinkEntry) -> Self {
        Self::Link(link)
    }
}

/// A validated layout rooted at a caller-supplied path.
///
/// The root itself has no name; its children are the top-level entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTree {
    entries: Vec<Entry>,
}

impl EntryTree {
    /// Validate and wrap the top-level entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTree`] if any name is empty, is `.` or `..`,
    /// contains a path separator (`/`, and `\` on Windows), or repeats
    /// among its siblings.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        validate_siblings(".", &entries)?;
        Ok(Self { entries })
    }

    /// A tree that declares an empty root directory.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_siblings(parent: &str, entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        let name = entry.name();
        validate_name(parent, name)?;

        if !seen.insert(name) {
            return Err(Error::invalid_tree(format!(
                "duplicate entry name {name:?} in {parent}"
            )));
        }

        if let Entry::Directory(dir) = entry {
            validate_siblings(&relative_join(parent, name), dir.entries())?;
        }
    }

    Ok(())
}

fn validate_name(parent: &str, name: &str) -> Result<()> {
    let problem = if name.is_empty() {
        "is empty"
    } else if name == "." || name == ".." {
        "is a relative path component"
    } else if name.contains('/') || (cfg!(windows) && name.contains('\\')) {
        "contains a path separator"
    } else if name.contains('\0') {
        "contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(Error::invalid_tree(format!(
        "entry name {name:?} in {parent} {problem}"
    )))
}

/// Joins names the way error messages show them: relative to the root `.`.
pub(crate) fn relative_join(parent: &str, name: &str) -> String {
    if parent == "." {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tree_keeps_declared_order() {
        let tree = EntryTree::new(vec![
            Entry::file("b"),
            Entry::directory("a", vec![Entry::link("z", "../b"), Entry::file("y")]),
        ])
        .unwrap();

        let names: Vec<_> = tree.entries().iter().map(Entry::name).collect();
        assert_eq!(names, vec!["b", "a"]);

        let Entry::Directory(dir) = &tree.entries()[1] else {
            panic!("expected a directory");
        };
        let names: Vec<_> = dir.entries().iter().map(Entry::name).collect();
        assert_eq!(names, vec!["z", "y"]);
    }

    #[test]
    fn duplicate_siblings_rejected() {
        let err = EntryTree::new(vec![Entry::file("a"), Entry::directory("a", vec![])]).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("duplicate entry name \"a\""));
    }

    #[test]
    fn nested_duplicate_reports_location() {
        let err = EntryTree::new(vec![Entry::directory(
            "outer",
            vec![Entry::directory("inner", vec![Entry::file("x"), Entry::link("x", "y")])],
        )])
        .unwrap_err();

        assert!(err.to_string().contains("outer/inner"), "got: {err}");
    }

    #[test]
    fn backslash_in_name_only_rejected_on_windows() {
        let result = EntryTree::new(vec![Entry::file("a\\b")]);
        assert_eq!(result.is_err(), cfg!(windows));
    }

    #[test]
    fn same_name_in_different_directories_is_fine() {
        let tree = EntryTree::new(vec![
            Entry::directory("a", vec![Entry::file("x")]),
            Entry::directory("b", vec![Entry::file("x")]),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn file_content_accessor() {
        let Entry::File(with) = Entry::file_with_content("a", "hi") else {
            unreachable!()
        };
        let Entry::File(without) = Entry::file("b") else {
            unreachable!()
        };

        assert_eq!(with.content(), Some(&b"hi"[..]));
        assert_eq!(without.content(), None);
    }
}
