//! YAML spec text to [`EntryTree`]
//!
//! Every key of a mapping names an entry. A node without a `type` key (or
//! with an empty value) is a directory whose keys are its children:
//!
//! ```yaml
//! configs:
//!   config1.txt:
//!     type: file
//!     data: "format: txt"
//! pkg:
//!   pkg1:
//!     type: link
//!     path: "../../pkg1"
//! empty-dir:
//! ```
//!
//! Files accept an optional `data` string, links require a `path` string.
//! Anything else is an [`Error::InvalidSpec`] carrying the offending node's
//! path relative to the root (`.`).

use serde_yaml::{Mapping, Value};

use crate::entry::relative_join;
use crate::{DirectoryEntry, Entry, EntryTree, Error, FileEntry, LinkEntry, Result};
use fstree_fs::NormalizedPath;

const ROOT: &str = ".";

/// Parse spec text into a validated tree.
///
/// ```
/// use fstree_core::spec;
///
/// let tree = spec::parse("cfg:\n  a.txt: {type: file, data: hi}\n").unwrap();
/// assert_eq!(tree.entries()[0].name(), "cfg");
/// ```
pub fn parse(text: &str) -> Result<EntryTree> {
    if text.trim().is_empty() {
        return Ok(EntryTree::empty());
    }

    let value: Value = serde_yaml::from_str(text)?;
    let mapping = match value {
        Value::Null => return Ok(EntryTree::empty()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(Error::invalid_spec(
                ROOT,
                format!("root must be a dictionary, got {}", describe(&other)),
            ));
        }
    };

    if mapping.contains_key("type") {
        return Err(Error::invalid_spec(ROOT, "unexpected \"type\" property at root"));
    }

    let entries = parse_children(ROOT, &mapping)?;
    EntryTree::new(entries)
}

/// Read and parse a spec file, choosing the format from its extension.
///
/// `.yaml`, `.yml` and `.json` are accepted; JSON documents are valid YAML.
pub fn load_spec(path: &NormalizedPath) -> Result<EntryTree> {
    let extension = path.extension().unwrap_or("");

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" | "json" => {
            let native = path.to_native();
            let text = std::fs::read_to_string(&native).map_err(|e| fstree_fs::Error::io(&native, e))?;
            tracing::debug!(path = %path, "Loaded spec file");
            parse(&text)
        }
        _ => Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}

fn parse_children(path: &str, mapping: &Mapping) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(mapping.len());

    for (key, value) in mapping {
        let name = entry_name(path, key)?;
        let child_path = relative_join(path, &name);
        entries.push(parse_entry(&child_path, name, value)?);
    }

    Ok(entries)
}

fn parse_entry(path: &str, name: String, value: &Value) -> Result<Entry> {
    let mapping = match value {
        Value::Null => return Ok(Entry::Directory(DirectoryEntry::new(name, Vec::new()))),
        Value::Mapping(mapping) => mapping,
        _ => return Err(Error::invalid_spec(path, "unable to convert to dictionary")),
    };

    match mapping.get("type") {
        None => {
            let children = parse_children(path, mapping)?;
            Ok(Entry::Directory(DirectoryEntry::new(name, children)))
        }
        Some(Value::String(kind)) if kind == "file" => parse_file(path, name, mapping),
        Some(Value::String(kind)) if kind == "link" => parse_link(path, name, mapping),
        Some(other) => Err(Error::invalid_spec(
            path,
            format!("unknown type: {}", describe(other)),
        )),
    }
}

fn parse_file(path: &str, name: String, mapping: &Mapping) -> Result<Entry> {
    let mut content = None;

    for (key, value) in mapping {
        match key.as_str() {
            Some("type") => {}
            Some("data") => match value {
                Value::String(data) => content = Some(data.clone().into_bytes()),
                other => {
                    return Err(Error::invalid_spec(
                        path,
                        format!("unable to convert data to string: {}", describe(other)),
                    ));
                }
            },
            _ => return Err(unknown_property(path, key)),
        }
    }

    Ok(Entry::File(FileEntry::new(name, content)))
}

fn parse_link(path: &str, name: String, mapping: &Mapping) -> Result<Entry> {
    let target = match mapping.get("path") {
        Some(Value::String(target)) => target.clone(),
        Some(other) => {
            return Err(Error::invalid_spec(
                path,
                format!("unable to convert path to string: {}", describe(other)),
            ));
        }
        None => return Err(Error::invalid_spec(path, "path property must be set for link")),
    };

    if let Some(key) = mapping
        .keys()
        .find(|key| !matches!(key.as_str(), Some("type") | Some("path")))
    {
        return Err(unknown_property(path, key));
    }

    Ok(Entry::Link(LinkEntry::new(name, target)))
}

fn entry_name(parent: &str, key: &Value) -> Result<String> {
    match key {
        Value::String(name) => Ok(name.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(Error::invalid_spec(
            parent,
            format!("entry names must be scalars, got {}", describe(other)),
        )),
    }
}

fn unknown_property(path: &str, key: &Value) -> Error {
    let key = match key {
        Value::String(key) => key.clone(),
        other => describe(other),
    };
    Error::invalid_spec(path, format!("unknown property: {key}"))
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a dictionary".to_string(),
        Value::Tagged(tagged) => format!("a value tagged {}", tagged.tag),
    }
}
