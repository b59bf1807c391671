//! Config persistence: read and write the JSON document behind a store.
//!
//! Output is deterministic: keys sorted (the section map is ordered), four
//! space indentation, trailing newline. Writes overwrite the target in
//! place with no temp file or rename.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::NkconfError;
use crate::store::Section;

/// Pure function: render a tree as the on-disk JSON text.
pub fn to_pretty_json(tree: &Section) -> Result<String, NkconfError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut ser)
        .map_err(NkconfError::SerializeError)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(NkconfError::InvalidUtf8)
}

/// Pure function: parse file contents into a root section.
///
/// `path` is only used for error messages.
pub fn parse_document(content: &str, path: &Path) -> Result<Section, NkconfError> {
    let value: Value = serde_json::from_str(content).map_err(|e| NkconfError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(section) => Ok(section),
        _ => Err(NkconfError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// I/O wrapper: read and parse `path`.
pub fn read_tree(path: &Path) -> Result<Section, NkconfError> {
    let content = std::fs::read_to_string(path).map_err(|e| NkconfError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_document(&content, path)
}

/// I/O wrapper: render `tree` and overwrite `path` with it.
pub fn write_tree(path: &Path, tree: &Section) -> Result<(), NkconfError> {
    let content = to_pretty_json(tree)?;
    std::fs::write(path, content).map_err(|e| NkconfError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
