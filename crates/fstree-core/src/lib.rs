//! Declarative filesystem trees
//!
//! An [`EntryTree`] describes directories, files and symbolic links. Two
//! symmetric operations reconcile it with a [`Filesystem`]:
//!
//! - **make** ([`Maker`], [`materialize`]) creates whatever is missing and
//!   leaves matching nodes alone, so running it twice is a no-op;
//! - **check** ([`Checker`], [`verify`]) reports the first [`Difference`]
//!   between the real tree and the declaration.
//!
//! # Architecture
//!
//! ```text
//!         fstree-cli
//!              |
//!         fstree-core   (entry model, spec parser, Maker, Checker)
//!              |
//!          fstree-fs    (Filesystem port, OS + in-memory adapters)
//! ```
//!
//! # Example
//!
//! ```
//! use fstree_core::{Entry, EntryTree, materialize, verify};
//! use fstree_fs::MemoryFilesystem;
//!
//! let fs = MemoryFilesystem::new();
//! let tree = EntryTree::new(vec![Entry::directory(
//!     "cfg",
//!     vec![Entry::file_with_content("a.txt", "hi")],
//! )])?;
//!
//! materialize(&fs, "root", &tree)?;
//! assert_eq!(verify(&fs, "root", &tree)?, None);
//! # Ok::<(), fstree_core::Error>(())
//! ```

pub mod api;
pub mod check;
pub mod entry;
pub mod error;
pub mod make;
pub mod spec;

pub use api::{check, check_over_os_fs, make, make_over_os_fs};
pub use check::{Checker, Difference, verify};
pub use entry::{DirectoryEntry, Entry, EntryTree, FileEntry, LinkEntry};
pub use error::{Error, Result};
pub use fstree_fs::{Filesystem, NormalizedPath};
pub use make::{Maker, materialize};
