//! Make and check against the real filesystem
//!
//! Symbolic link cases only run on unix, where creating links needs no
//! special privileges.

use fstree_core::{NormalizedPath, check_over_os_fs, make_over_os_fs};
use fstree_test_utils::fixtures::{NEW_DIRECTORY_SPEC, dedent};
use fstree_test_utils::root::TestRoot;
use pretty_assertions::assert_eq;

// ============================================================================
// Make
// ============================================================================

#[test]
fn make_rejects_empty_root() {
    let err = make_over_os_fs("", "file.txt: {type: file, data: data}").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn make_creates_missing_root() {
    let root = TestRoot::new();

    make_over_os_fs(root.join_str("root"), "file.txt: {type: file, data: data}").unwrap();

    root.assert_dir("root");
    root.assert_file("root/file.txt", "data");
}

#[cfg(unix)]
#[test]
fn make_complex_tree() {
    let root = TestRoot::new();

    make_over_os_fs(root.join_str("root"), NEW_DIRECTORY_SPEC).unwrap();

    root.assert_file("root/new-directory/file.txt", "");
    root.assert_link("root/new-directory/link1", "./file.txt");
    root.assert_dir("root/new-directory/subdirectory");
}

#[cfg(unix)]
#[test]
fn make_twice_succeeds() {
    let root = TestRoot::new();
    let target = root.join_str("root");

    make_over_os_fs(target.as_str(), NEW_DIRECTORY_SPEC).unwrap();
    make_over_os_fs(target.as_str(), NEW_DIRECTORY_SPEC).unwrap();

    root.assert_link("root/new-directory/link1", "./file.txt");
}

#[cfg(unix)]
#[test]
fn make_leaves_dangling_link_alone() {
    let root = TestRoot::new();
    root.create_dir("root");
    root.create_link("root/pkg", "../../nowhere");

    make_over_os_fs(root.join_str("root"), "pkg: {type: link, path: ../../nowhere}").unwrap();

    root.assert_link("root/pkg", "../../nowhere");
}

#[test]
fn make_conflict_keeps_existing_file() {
    let root = TestRoot::new();
    root.create_dir("root");
    root.create_file("root/a.txt", "mine");

    let err = make_over_os_fs(root.join_str("root"), "a.txt: {type: file, data: theirs}").unwrap_err();

    assert!(err.is_conflict());
    root.assert_file("root/a.txt", "mine");
}

// ============================================================================
// Check
// ============================================================================

#[cfg(unix)]
#[test]
fn check_matching_tree() {
    let root = TestRoot::new();
    root.create_dir("root/new-directory/subdirectory");
    root.create_file("root/new-directory/file.txt", "");
    root.create_link("root/new-directory/link1", "./file.txt");

    let difference = check_over_os_fs(root.join_str("root"), NEW_DIRECTORY_SPEC).unwrap();

    assert_eq!(difference, None);
}

#[cfg(unix)]
#[test]
fn check_reports_missing_file() {
    let root = TestRoot::new();
    root.create_dir("root/new-directory/subdirectory");
    root.create_link("root/new-directory/link1", "./file.txt");

    let difference = check_over_os_fs(root.join_str("root"), NEW_DIRECTORY_SPEC)
        .unwrap()
        .unwrap();

    assert_eq!(difference.path, root.join_str("root/new-directory/file.txt"));
    assert_eq!(difference.actual, "file doesn't exist");
}

#[cfg(unix)]
#[test]
fn check_does_not_follow_links() {
    let root = TestRoot::new();
    root.create_dir("root/real");
    root.create_link("root/alias", "real");

    let spec = dedent(
        "
        real:
        alias:
        ",
    );
    let difference = check_over_os_fs(root.join_str("root"), &spec).unwrap().unwrap();

    assert_eq!(difference.path, root.join_str("root/alias"));
    assert_eq!(difference.actual, "path isn't a directory");
}

#[test]
fn check_reports_extra_entry() {
    let root = TestRoot::new();
    root.create_dir("root/cfg");
    root.create_file("root/cfg/a.txt", "hi");
    root.create_file("root/cfg/extra.txt", "");

    let difference = check_over_os_fs(root.join_str("root"), "cfg:\n  a.txt: {type: file, data: hi}\n")
        .unwrap()
        .unwrap();

    assert_eq!(difference.path, NormalizedPath::new(root.join("root/cfg/extra.txt")).as_str());
    assert_eq!(difference.expected, "path doesn't exist");
    assert_eq!(difference.actual, "path exists");
}

#[cfg(target_os = "linux")]
#[test]
fn check_reports_non_utf8_name_as_extra_entry() {
    use std::os::unix::ffi::OsStrExt;

    let root = TestRoot::new();
    root.create_dir("root");
    let raw = std::ffi::OsStr::from_bytes(b"bad\xff");
    std::fs::write(root.join("root").join(raw), "").unwrap();

    let difference = check_over_os_fs(root.join_str("root"), "").unwrap().unwrap();

    assert_eq!(difference.path, format!("{}/bad\u{FFFD}", root.join_str("root")));
    assert_eq!(difference.expected, "path doesn't exist");
    assert_eq!(difference.actual, "path exists");
}

#[cfg(unix)]
#[test]
fn make_uses_backslash_root_literally() {
    let root = TestRoot::new();
    root.create_dir("a");

    make_over_os_fs(root.join_str("a\\b"), "f: {type: file, data: x}").unwrap();

    root.assert_file("a\\b/f", "x");
    root.assert_missing("a/b");
    assert_eq!(
        check_over_os_fs(root.join_str("a\\b"), "f: {type: file, data: x}").unwrap(),
        None
    );
}

#[test]
fn check_rejects_empty_root() {
    let err = check_over_os_fs("", "").unwrap_err();
    assert!(err.is_config());
}

// ============================================================================
// Both
// ============================================================================

#[cfg(unix)]
#[test]
fn made_tree_checks_clean() {
    let root = TestRoot::new();
    let target = root.join_str("root");

    make_over_os_fs(target.as_str(), NEW_DIRECTORY_SPEC).unwrap();

    assert_eq!(check_over_os_fs(target.as_str(), NEW_DIRECTORY_SPEC).unwrap(), None);
}
