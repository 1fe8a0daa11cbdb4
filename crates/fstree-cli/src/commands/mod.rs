//! Command implementations for fstree-cli

pub mod check;
pub mod make;

pub use check::run_check;
pub use make::run_make;

use std::io::Read;
use std::path::{Path, PathBuf};

use fstree_core::{EntryTree, NormalizedPath, spec};

use crate::error::{CliError, Result};

/// Spec argument meaning "read from stdin".
const STDIN: &str = "-";

/// Read the spec named on the command line.
pub fn load_tree(spec_arg: &str) -> Result<EntryTree> {
    if spec_arg == STDIN {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        tracing::debug!(bytes = text.len(), "Read spec from stdin");
        return Ok(spec::parse(&text)?);
    }

    if !Path::new(spec_arg).is_file() {
        return Err(CliError::user(format!("Spec file not found: {spec_arg}")));
    }
    Ok(spec::load_spec(&NormalizedPath::new(spec_arg))?)
}

/// The directory the tree is rooted at: `--root`, `FSTREE_ROOT` or the
/// current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<NormalizedPath> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    if root.as_os_str().is_empty() {
        return Err(CliError::user("Root directory must not be empty"));
    }
    Ok(NormalizedPath::new(root))
}
