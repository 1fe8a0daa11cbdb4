//! [`Filesystem`] backed by the real operating system

use std::fs;
use std::path::Path;

use crate::io::{self, RobustnessConfig};
use crate::{Error, Filesystem, NormalizedPath, Result};

/// Talks to the operating system through `std::fs`.
///
/// Classification uses `symlink_metadata`, so links are never followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem {
    robustness: RobustnessConfig,
}

impl OsFilesystem {
    /// Create an OsFilesystem with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an OsFilesystem with custom robustness settings.
    pub fn with_robustness(robustness: RobustnessConfig) -> Self {
        Self { robustness }
    }

    fn file_type(path: &NormalizedPath) -> Option<fs::FileType> {
        fs::symlink_metadata(path.to_native())
            .ok()
            .map(|metadata| metadata.file_type())
    }
}

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &NormalizedPath) -> bool {
        Self::file_type(path).is_some()
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        Self::file_type(path).is_some_and(|t| t.is_file())
    }

    fn is_link(&self, path: &NormalizedPath) -> bool {
        Self::file_type(path).is_some_and(|t| t.is_symlink())
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        Self::file_type(path).is_some_and(|t| t.is_dir())
    }

    fn list_children(&self, path: &NormalizedPath) -> Result<Vec<String>> {
        let native = path.to_native();
        let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            // Non-UTF-8 names are kept lossily so they still count as entries
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!(path = %native.join(&raw).display(), "Child name is not valid UTF-8");
                    raw.to_string_lossy().into_owned()
                }
            };
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn read_file(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        let native = path.to_native();
        fs::read(&native).map_err(|e| Error::io(&native, e))
    }

    fn read_link(&self, path: &NormalizedPath) -> Result<String> {
        let native = path.to_native();
        let target = fs::read_link(&native).map_err(|e| Error::io(&native, e))?;
        target.into_os_string().into_string().map_err(|_| {
            Error::io(
                &native,
                std::io::Error::new(std::io::ErrorKind::InvalidData, "link target is not valid UTF-8"),
            )
        })
    }

    fn write_file(&self, path: &NormalizedPath, data: &[u8]) -> Result<()> {
        io::write_atomic(path, data, self.robustness)
    }

    fn create_symlink(&self, path: &NormalizedPath, target: &str) -> Result<()> {
        let native = path.to_native();
        symlink(Path::new(target), &native)
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        fs::create_dir(&native).map_err(|e| Error::io(&native, e))
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::io(link, e))
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::windows::fs::symlink_file(target, link).map_err(|e| Error::io(link, e))
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Path, link: &Path) -> Result<()> {
    Err(Error::SymlinkUnsupported {
        path: link.to_path_buf(),
    })
}
