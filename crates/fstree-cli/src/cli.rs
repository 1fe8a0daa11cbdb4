//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fstree - Create and check filesystem trees from a YAML description
#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the described tree, leaving matching entries alone
    ///
    /// Examples:
    ///   fstree make tree.yaml                # Under the current directory
    ///   fstree make tree.yaml --root build/  # Under build/
    ///   cat tree.yaml | fstree make -        # Spec from stdin
    Make {
        /// Spec file (.yaml, .yml or .json), or - for stdin
        spec: String,

        /// Directory the tree is rooted at
        #[arg(short, long, env = "FSTREE_ROOT")]
        root: Option<PathBuf>,
    },

    /// Report the first place where the tree differs from the spec
    ///
    /// Exits with status 2 when a difference is found.
    Check {
        /// Spec file (.yaml, .yml or .json), or - for stdin
        spec: String,

        /// Directory the tree is rooted at
        #[arg(short, long, env = "FSTREE_ROOT")]
        root: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
