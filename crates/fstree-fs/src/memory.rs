//! In-memory [`Filesystem`] for tests and dry experiments

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Error, Filesystem, NormalizedPath, Result};

/// A node stored in a [`MemoryFilesystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory,
    File(Vec<u8>),
    Link(String),
}

/// A filesystem that lives entirely in memory.
///
/// Nodes are keyed by their full path. Creating a node requires its parent to
/// be an existing directory, except for top-level paths (no parent, or `/` as
/// parent), which are always creatable. Links are stored but never followed.
///
/// Paths registered with [`MemoryFilesystem::deny`] make every fallible
/// operation on them fail with [`ErrorKind::PermissionDenied`].
///
/// # Example
///
/// ```
/// use fstree_fs::{Filesystem, MemoryFilesystem, NormalizedPath};
///
/// let fs = MemoryFilesystem::new().with_file("root/a.txt", "hi");
/// assert!(fs.is_dir(&NormalizedPath::new("root")));
/// assert_eq!(fs.read_file(&NormalizedPath::new("root/a.txt")).unwrap(), b"hi");
/// ```
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    nodes: RwLock<BTreeMap<NormalizedPath, Node>>,
    denied: RwLock<BTreeSet<NormalizedPath>>,
}

impl MemoryFilesystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating missing ancestors.
    pub fn with_dir(self, path: impl Into<NormalizedPath>) -> Self {
        self.insert(path, Node::Directory);
        self
    }

    /// Add a file, creating missing ancestors.
    pub fn with_file(self, path: impl Into<NormalizedPath>, data: impl AsRef<[u8]>) -> Self {
        self.insert(path, Node::File(data.as_ref().to_vec()));
        self
    }

    /// Add a symbolic link, creating missing ancestors.
    pub fn with_link(self, path: impl Into<NormalizedPath>, target: impl Into<String>) -> Self {
        self.insert(path, Node::Link(target.into()));
        self
    }

    /// Put `node` at `path`, replacing whatever was there and creating
    /// missing ancestor directories.
    pub fn insert(&self, path: impl Into<NormalizedPath>, node: Node) {
        let path = path.into();
        let mut nodes = self.write_nodes();

        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            ancestor = dir.parent();
            nodes.entry(dir).or_insert(Node::Directory);
        }

        nodes.insert(path, node);
    }

    /// Remove the node at `path` and everything below it.
    pub fn remove(&self, path: impl Into<NormalizedPath>) -> Option<Node> {
        let path = path.into();
        let mut nodes = self.write_nodes();
        let prefix = format!("{}/", path.as_str().trim_end_matches('/'));
        nodes.retain(|key, _| !key.as_str().starts_with(&prefix));
        nodes.remove(&path)
    }

    /// Make every fallible operation on exactly `path` fail.
    pub fn deny(&self, path: impl Into<NormalizedPath>) {
        self.denied
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into());
    }

    /// The node at `path`, if any.
    pub fn get(&self, path: impl Into<NormalizedPath>) -> Option<Node> {
        self.read_nodes().get(&path.into()).cloned()
    }

    /// A copy of the whole store.
    pub fn snapshot(&self) -> BTreeMap<NormalizedPath, Node> {
        self.read_nodes().clone()
    }

    fn read_nodes(&self) -> RwLockReadGuard<'_, BTreeMap<NormalizedPath, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_nodes(&self) -> RwLockWriteGuard<'_, BTreeMap<NormalizedPath, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_allowed(&self, path: &NormalizedPath) -> Result<()> {
        let denied = self.denied.read().unwrap_or_else(PoisonError::into_inner);
        if denied.contains(path) {
            return Err(failure(path, ErrorKind::PermissionDenied, "permission denied"));
        }
        Ok(())
    }

    fn create(&self, path: &NormalizedPath, node: Node) -> Result<()> {
        self.check_allowed(path)?;
        let mut nodes = self.write_nodes();

        if nodes.contains_key(path) {
            return Err(failure(path, ErrorKind::AlreadyExists, "path already exists"));
        }

        if let Some(parent) = path.parent().filter(|p| p.as_str() != "/") {
            match nodes.get(&parent) {
                Some(Node::Directory) => {}
                Some(_) => {
                    return Err(failure(path, ErrorKind::NotADirectory, "parent is not a directory"));
                }
                None => {
                    return Err(failure(path, ErrorKind::NotFound, "parent directory does not exist"));
                }
            }
        }

        nodes.insert(path.clone(), node);
        Ok(())
    }
}

fn failure(path: &NormalizedPath, kind: ErrorKind, message: &str) -> Error {
    Error::io(path.to_native(), std::io::Error::new(kind, message.to_string()))
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &NormalizedPath) -> bool {
        self.read_nodes().contains_key(path)
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        matches!(self.read_nodes().get(path), Some(Node::File(_)))
    }

    fn is_link(&self, path: &NormalizedPath) -> bool {
        matches!(self.read_nodes().get(path), Some(Node::Link(_)))
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        matches!(self.read_nodes().get(path), Some(Node::Directory))
    }

    fn list_children(&self, path: &NormalizedPath) -> Result<Vec<String>> {
        self.check_allowed(path)?;
        let nodes = self.read_nodes();

        match nodes.get(path) {
            Some(Node::Directory) => {}
            Some(_) => return Err(failure(path, ErrorKind::NotADirectory, "not a directory")),
            None => return Err(failure(path, ErrorKind::NotFound, "no such directory")),
        }

        // BTreeMap iteration keeps the result sorted
        let names = nodes
            .keys()
            .filter(|key| key.parent().as_ref() == Some(path))
            .filter_map(|key| key.file_name().map(str::to_string))
            .collect();
        Ok(names)
    }

    fn read_file(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        self.check_allowed(path)?;
        match self.read_nodes().get(path) {
            Some(Node::File(data)) => Ok(data.clone()),
            Some(_) => Err(failure(path, ErrorKind::InvalidInput, "not a regular file")),
            None => Err(failure(path, ErrorKind::NotFound, "no such file")),
        }
    }

    fn read_link(&self, path: &NormalizedPath) -> Result<String> {
        self.check_allowed(path)?;
        match self.read_nodes().get(path) {
            Some(Node::Link(target)) => Ok(target.clone()),
            Some(_) => Err(failure(path, ErrorKind::InvalidInput, "not a symbolic link")),
            None => Err(failure(path, ErrorKind::NotFound, "no such link")),
        }
    }

    fn write_file(&self, path: &NormalizedPath, data: &[u8]) -> Result<()> {
        if self.is_file(path) {
            self.check_allowed(path)?;
            self.write_nodes().insert(path.clone(), Node::File(data.to_vec()));
            return Ok(());
        }
        self.create(path, Node::File(data.to_vec()))
    }

    fn create_symlink(&self, path: &NormalizedPath, target: &str) -> Result<()> {
        self.create(path, Node::Link(target.to_string()))
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        self.create(path, Node::Directory)
    }
}
