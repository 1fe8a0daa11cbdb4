use fstree_fs::{NormalizedPath, normalize_link_target};
use rstest::rstest;

#[test]
fn test_normalize_forward_slashes() {
    let path = NormalizedPath::new("foo/bar/baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(windows)]
#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(windows)]
#[test]
fn test_normalize_mixed_slashes() {
    let path = NormalizedPath::new("foo/bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[cfg(unix)]
#[test]
fn test_backslashes_kept_on_unix() {
    let path = NormalizedPath::new("foo/bar\\baz");
    assert_eq!(path.as_str(), "foo/bar\\baz");
    assert_eq!(path.file_name(), Some("bar\\baz"));
}

#[test]
fn test_dot_components_are_kept() {
    let path = NormalizedPath::new("./foo/../bar");
    assert_eq!(path.as_str(), "./foo/../bar");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("foo/bar");
    let joined = base.join("baz");
    assert_eq!(joined.as_str(), "foo/bar/baz");
}

#[test]
fn test_join_onto_root() {
    let joined = NormalizedPath::new("/").join("tmp");
    assert_eq!(joined.as_str(), "/tmp");
}

#[test]
fn test_join_empty_segment_is_identity() {
    let base = NormalizedPath::new("foo/bar");
    assert_eq!(base.join(""), base);
}

#[test]
fn test_to_native_returns_pathbuf() {
    let path = NormalizedPath::new("foo/bar");
    let native = path.to_native();
    // On Windows this would have backslashes, on Unix forward slashes
    assert!(native.to_string_lossy().contains("bar"));
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "foo/bar");
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("foo/bar/baz.txt");
    assert_eq!(path.file_name(), Some("baz.txt"));
}

#[test]
fn test_extension() {
    assert_eq!(NormalizedPath::new("spec/tree.yaml").extension(), Some("yaml"));
    assert_eq!(NormalizedPath::new("spec/.hidden").extension(), None);
    assert_eq!(NormalizedPath::new("spec/noext").extension(), None);
}

#[rstest]
#[case("file.txt", "file.txt")]
#[case("./file.txt", "file.txt")]
#[case("../../pkg1", "../../pkg1")]
#[case("a//b/./c/", "a/b/c")]
#[case("/abs/./path", "/abs/path")]
#[case("./", ".")]
fn test_normalize_link_target(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_link_target(input), expected);
}
