//! Make command implementation

use colored::Colorize;
use fstree_core::Maker;
use fstree_fs::OsFilesystem;

use super::{load_tree, resolve_root};
use crate::error::Result;

/// Run the make command
pub fn run_make(spec: &str, root: Option<std::path::PathBuf>) -> Result<()> {
    let tree = load_tree(spec)?;
    let root = resolve_root(root)?;

    println!("{} Making tree at {}...", "=>".blue().bold(), root.as_str().cyan());

    Maker::new(OsFilesystem::new()).make(&root, &tree)?;

    println!("{} Tree is in place.", "OK".green().bold());
    Ok(())
}
