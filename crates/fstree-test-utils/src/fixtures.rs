//! Spec texts shared by the test suites.

/// A directory holding an empty file, a relative link to it and an empty
/// subdirectory.
pub const NEW_DIRECTORY_SPEC: &str = "\
new-directory:
  file.txt:
    type: file
  link1:
    type: link
    path: ./file.txt
  subdirectory:
";

/// Files with content across nested directories, plus a link that leaves the
/// root.
pub const PROJECT_SPEC: &str = "\
configs:
  config1.txt:
    type: file
    data: \"format: txt\"
  nested:
    config2.yaml:
      type: file
      data: \"key: value\\n\"
pkg:
  pkg1:
    type: link
    path: ../../pkg1
empty-dir:
";

/// Remove the common leading indentation of a multi-line literal.
///
/// Tab indentation is turned into two spaces first, so specs can be written
/// inline in tests at any nesting level.
pub fn dedent(text: &str) -> String {
    let lines: Vec<String> = text.lines().map(|line| line.replace('\t', "  ")).collect();

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out = String::new();
    for line in &lines {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(&line[indent..]);
            out.push('\n');
        }
    }
    out.trim_start_matches('\n').to_string()
}
