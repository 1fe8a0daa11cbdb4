//! Forward-slash paths shared by every adapter

use std::path::{Path, PathBuf};

/// A path stored with `/` separators whatever the platform.
///
/// Tree walks build these by joining entry names onto the root; adapters
/// turn them back into native paths with [`NormalizedPath::to_native`].
///
/// Normalization is purely lexical: repeated separators collapse into one and
/// a trailing separator is dropped, but `.` and `..` components are kept
/// as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Normalize any path-like input. On Windows backslashes become `/`;
    /// elsewhere they are ordinary name bytes and are kept.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: collapse_separators(&native_separators_to_slash(&path_str)),
        }
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this path is the empty string.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The path in the platform's own form, for handing to `std::fs`.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append one segment.
    ///
    /// An empty segment returns the path unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = native_separators_to_slash(segment);
        if segment_normalized.is_empty() {
            return self.clone();
        }
        if self.inner.is_empty() {
            return Self::new(segment_normalized);
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: collapse_separators(&joined),
        }
    }

    /// Everything before the last separator.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) if trimmed.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// The last component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Text after the last `.` of the last component.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Rewrites `\` to `/` on platforms where it is a separator.
fn native_separators_to_slash(path: &str) -> String {
    if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Collapses runs of `/` into one and drops a trailing `/`.
///
/// A leading `//` is preserved so UNC-style paths survive.
fn collapse_separators(path: &str) -> String {
    let (prefix, rest) = if path.starts_with("//") && !path.starts_with("///") {
        ("//", &path[2..])
    } else if path.starts_with('/') {
        ("/", path.trim_start_matches('/'))
    } else {
        ("", path)
    };

    let body = rest
        .split('/')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    format!("{prefix}{body}")
}

/// Lexically normalizes a symbolic link target for comparison.
///
/// Repeated separators, `.` components and trailing separators are removed.
/// `..` components are kept: a target resolves from the link's own
/// directory.
///
/// ```
/// use fstree_fs::normalize_link_target;
///
/// assert_eq!(normalize_link_target("./file.txt"), "file.txt");
/// assert_eq!(normalize_link_target("../pkg//bin/"), "../pkg/bin");
/// assert_eq!(normalize_link_target("/usr/./lib"), "/usr/lib");
/// ```
pub fn normalize_link_target(target: &str) -> String {
    let target = native_separators_to_slash(target);

    let absolute = target.starts_with('/');
    let body = target
        .split('/')
        .filter(|component| !component.is_empty() && *component != ".")
        .collect::<Vec<_>>()
        .join("/");

    match (absolute, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) if target.is_empty() => String::new(),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<&NormalizedPath> for NormalizedPath {
    fn from(p: &NormalizedPath) -> Self {
        p.clone()
    }
}
