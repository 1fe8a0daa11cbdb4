//! Atomic file writes with locking

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::{Error, NormalizedPath, Result};

/// Knobs for how hard file writes try to be durable.
#[derive(Debug, Clone, Copy)]
pub struct RobustnessConfig {
    /// Flush written files to disk before renaming them into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self { enable_fsync: true }
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
/// The parent directory must already exist.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let written = write_locked(&mut temp_file, content, config)
        .map_err(|e| Error::io(&temp_path, e))
        .and_then(|()| {
            fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
        });

    let _ = FileExt::unlock(&temp_file);

    match written {
        Ok(()) => {
            tracing::trace!(path = %path, bytes = content.len(), "Wrote file");
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            Err(e)
        }
    }
}

fn write_locked(file: &mut fs::File, content: &[u8], config: RobustnessConfig) -> std::io::Result<()> {
    file.write_all(content)?;
    if config.enable_fsync {
        file.sync_all()?;
    }
    Ok(())
}
