//! One-call entry points that take spec text instead of a built tree

use fstree_fs::{Filesystem, NormalizedPath, OsFilesystem};

use crate::{Checker, Difference, Maker, Result, spec};

/// Makes the tree described by `yaml` under `root`.
///
/// For example, with
///
/// ```yaml
/// configs:
///   config1.txt:
///     type: file
///     data: "format: txt"
/// pkg:
///   pkg1:
///     type: link
///     path: "../../pkg1"
/// ```
///
/// it creates `configs/config1.txt` (containing `format: txt`) and the link
/// `pkg/pkg1` pointing to `../../pkg1`.
pub fn make(fs: impl Filesystem, root: impl Into<NormalizedPath>, yaml: &str) -> Result<()> {
    let tree = spec::parse(yaml)?;
    Maker::new(fs).make(&root.into(), &tree)
}

/// [`make`] on the real filesystem.
pub fn make_over_os_fs(root: impl Into<NormalizedPath>, yaml: &str) -> Result<()> {
    make(OsFilesystem::new(), root, yaml)
}

/// Checks the tree under `root` against `yaml`.
///
/// ```
/// use fstree_fs::MemoryFilesystem;
///
/// let fs = MemoryFilesystem::new().with_file("root/a.txt", "hi");
/// let difference = fstree_core::check(&fs, "root", "a.txt: {type: file, data: bye}").unwrap();
///
/// assert_eq!(difference.unwrap().path, "root/a.txt");
/// ```
pub fn check(fs: impl Filesystem, root: impl Into<NormalizedPath>, yaml: &str) -> Result<Option<Difference>> {
    let tree = spec::parse(yaml)?;
    Checker::new(fs).check(&root.into(), &tree)
}

/// [`check`] on the real filesystem.
pub fn check_over_os_fs(root: impl Into<NormalizedPath>, yaml: &str) -> Result<Option<Difference>> {
    check(OsFilesystem::new(), root, yaml)
}
