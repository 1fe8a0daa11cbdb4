//! Multi-step scenarios mixing the entry API, both adapters and edits made
//! behind the library's back.

use fstree_core::{Checker, Entry, EntryTree, Maker, NormalizedPath};
use fstree_fs::{MemoryFilesystem, Node, OsFilesystem, RobustnessConfig};
use fstree_test_utils::root::TestRoot;
use pretty_assertions::assert_eq;

fn config_tree(content: &str) -> EntryTree {
    EntryTree::new(vec![Entry::directory(
        "cfg",
        vec![Entry::file_with_content("a.txt", content)],
    )])
    .unwrap()
}

#[test]
fn edited_file_is_detected_then_blocks_make() {
    let root = TestRoot::new();
    let target = NormalizedPath::new(root.join("root"));
    let fs = OsFilesystem::with_robustness(RobustnessConfig { enable_fsync: false });
    let maker = Maker::new(&fs);
    let checker = Checker::new(&fs);

    maker.make(&target, &config_tree("hi")).unwrap();
    assert_eq!(checker.check(&target, &config_tree("hi")).unwrap(), None);

    let difference = checker.check(&target, &config_tree("bye")).unwrap().unwrap();
    assert_eq!(difference.path, target.join("cfg").join("a.txt").as_str());
    assert_eq!(difference.actual, "file data isn't equal to expected data");

    let err = maker.make(&target, &config_tree("bye")).unwrap_err();
    assert!(err.is_conflict());
    root.assert_file("root/cfg/a.txt", "hi");
}

#[test]
fn removed_directory_is_recreated() {
    let root = TestRoot::new();
    let target = NormalizedPath::new(root.join("root"));
    let fs = OsFilesystem::new();
    let tree = config_tree("hi");

    Maker::new(&fs).make(&target, &tree).unwrap();
    std::fs::remove_dir_all(root.join("root/cfg")).unwrap();

    let difference = Checker::new(&fs).check(&target, &tree).unwrap().unwrap();
    assert_eq!(difference.actual, "directory doesn't exist");

    Maker::new(&fs).make(&target, &tree).unwrap();
    assert_eq!(Checker::new(&fs).check(&target, &tree).unwrap(), None);
}

#[test]
fn memory_and_os_adapters_agree() {
    let root = TestRoot::new();
    let os_target = NormalizedPath::new(root.join("root"));
    let memory = MemoryFilesystem::new();
    let tree = EntryTree::new(vec![
        Entry::directory("docs", vec![Entry::file("README")]),
        Entry::file_with_content("version", "1\n"),
        Entry::directory("empty", vec![]),
    ])
    .unwrap();

    Maker::new(&memory).make(&NormalizedPath::new("root"), &tree).unwrap();
    Maker::new(OsFilesystem::new()).make(&os_target, &tree).unwrap();

    assert_eq!(memory.get("root/docs/README"), Some(Node::File(Vec::new())));
    root.assert_file("root/docs/README", "");
    root.assert_file("root/version", "1\n");
    root.assert_dir("root/empty");

    // The same stray entry is reported the same way, relative to each root
    memory.insert("root/empty/stray", Node::File(Vec::new()));
    root.create_file("root/empty/stray", "");

    let in_memory = Checker::new(&memory)
        .check(&NormalizedPath::new("root"), &tree)
        .unwrap()
        .unwrap();
    let on_disk = Checker::new(OsFilesystem::new())
        .check(&os_target, &tree)
        .unwrap()
        .unwrap();

    assert_eq!(in_memory.path, "root/empty/stray");
    assert_eq!(on_disk.path, os_target.join("empty").join("stray").as_str());
    assert_eq!(in_memory.expected, on_disk.expected);
    assert_eq!(in_memory.actual, on_disk.actual);
}
