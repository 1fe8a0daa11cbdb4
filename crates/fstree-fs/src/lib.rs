//! Filesystem port for fstree
//!
//! Provides the [`Filesystem`] capability trait the reconciler is written
//! against, plus two implementations: [`OsFilesystem`] for the real disk and
//! [`MemoryFilesystem`] for tests.

pub mod error;
pub mod filesystem;
pub mod io;
pub mod memory;
pub mod os;
pub mod path;

pub use error::{Error, Result};
pub use filesystem::Filesystem;
pub use io::RobustnessConfig;
pub use memory::{MemoryFilesystem, Node};
pub use os::OsFilesystem;
pub use path::{NormalizedPath, normalize_link_target};
