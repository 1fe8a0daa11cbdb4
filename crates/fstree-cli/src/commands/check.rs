//! Check command implementation

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use fstree_core::{Checker, Difference};
use fstree_fs::OsFilesystem;

use super::{load_tree, resolve_root};
use crate::error::Result;

/// JSON form of a check result.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    root: &'a str,
    matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    difference: Option<&'a Difference>,
}

/// Run the check command
///
/// Returns whether the tree matches the spec.
pub fn run_check(spec: &str, root: Option<PathBuf>, json: bool) -> Result<bool> {
    let tree = load_tree(spec)?;
    let root = resolve_root(root)?;

    let difference = Checker::new(OsFilesystem::new()).check(&root, &tree)?;

    if json {
        let report = CheckReport {
            root: root.as_str(),
            matches: difference.is_none(),
            difference: difference.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(difference.is_none());
    }

    match &difference {
        None => {
            println!("{} Tree at {} matches.", "OK".green().bold(), root.as_str().cyan());
        }
        Some(difference) => {
            println!("{} {}", "DIFFERENT".yellow().bold(), difference.path);
            println!("   {}: {}", "expected".dimmed(), difference.expected);
            println!("   {}:   {}", "actual".dimmed(), difference.actual);
        }
    }

    Ok(difference.is_none())
}
