//! [`TestRoot`]: a temporary directory for filesystem scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory with helpers for building and asserting on trees.
///
/// Paths passed to the helpers are relative to [`TestRoot::path`].
///
/// # Example
///
/// ```rust
/// use fstree_test_utils::root::TestRoot;
///
/// let root = TestRoot::new();
/// root.create_dir("cfg");
/// root.create_file("cfg/a.txt", "hi");
/// root.assert_file("cfg/a.txt", "hi");
/// ```
pub struct TestRoot {
    temp_dir: TempDir,
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoot {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return `path` resolved against the temporary directory.
    pub fn join(&self, path: &str) -> PathBuf {
        self.path().join(path)
    }

    /// Return `path` resolved against the temporary directory as a string,
    /// the form the tree operations take.
    ///
    /// # Panics
    /// Panics if the temporary directory is not valid UTF-8.
    pub fn join_str(&self, path: &str) -> String {
        self.join(path)
            .to_str()
            .unwrap_or_else(|| panic!("temporary path is not UTF-8: {}", self.path().display()))
            .to_string()
    }

    /// Create a directory (and its parents).
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let full = self.join(path);
        fs::create_dir_all(&full)
            .unwrap_or_else(|e| panic!("create_dir: failed to create {}: {e}", full.display()));
        full
    }

    /// Write a file, replacing any existing content.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.join(path);
        fs::write(&full, content)
            .unwrap_or_else(|e| panic!("create_file: failed to write {}: {e}", full.display()));
        full
    }

    /// Create a symbolic link at `path` pointing to `target`.
    #[cfg(unix)]
    pub fn create_link(&self, path: &str, target: &str) -> PathBuf {
        let full = self.join(path);
        std::os::unix::fs::symlink(target, &full)
            .unwrap_or_else(|e| panic!("create_link: failed to link {}: {e}", full.display()));
        full
    }

    /// Assert that `path` is a directory (not a link to one).
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_dir(&self, path: &str) {
        let full = self.join(path);
        let metadata = fs::symlink_metadata(&full)
            .unwrap_or_else(|e| panic!("Expected directory {}: {e}", full.display()));
        assert!(metadata.is_dir(), "Expected a directory at {}", full.display());
    }

    /// Assert that `path` is a regular file holding exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_file(&self, path: &str, content: &str) {
        let full = self.join(path);
        let metadata = fs::symlink_metadata(&full)
            .unwrap_or_else(|e| panic!("Expected file {}: {e}", full.display()));
        assert!(metadata.is_file(), "Expected a regular file at {}", full.display());

        let actual = fs::read_to_string(&full)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full.display()));
        assert_eq!(
            actual,
            content,
            "File {} has unexpected content",
            full.display()
        );
    }

    /// Assert that `path` is a symbolic link whose target reads `target`.
    ///
    /// # Panics
    /// Panics if `path` is not a link or points elsewhere.
    pub fn assert_link(&self, path: &str, target: &str) {
        let full = self.join(path);
        let actual = fs::read_link(&full)
            .unwrap_or_else(|e| panic!("Expected link {}: {e}", full.display()));
        assert_eq!(
            actual.as_path(),
            Path::new(target),
            "Link {} points somewhere else",
            full.display()
        );
    }

    /// Assert that nothing exists at `path`, not even a dangling link.
    pub fn assert_missing(&self, path: &str) {
        let full = self.join(path);
        assert!(
            fs::symlink_metadata(&full).is_err(),
            "Expected nothing at {}",
            full.display()
        );
    }
}
