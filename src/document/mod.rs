//! Document Loading
//!
//! Turns YAML text, or a file holding it, into the root mapping the
//! validator works on. Only structural problems are detected here.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Structural problems that prevent a document from being validated
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File is not valid UTF-8 text: {}", .0.display())]
    NotUtf8(PathBuf),

    #[error("Invalid YAML syntax: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("Empty YAML file")]
    Empty,

    #[error("Document root must be a mapping, found a {0}")]
    NotAMapping(&'static str),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a document from disk as text
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
        _ => DocumentError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8(path.to_path_buf()))
}

/// Parse document text into its root mapping
pub fn parse_document(content: &str) -> Result<Mapping, DocumentError> {
    if content.trim().is_empty() {
        return Err(DocumentError::Empty);
    }

    let value: Value = serde_yaml::from_str(content)?;
    if is_empty_value(&value) {
        return Err(DocumentError::Empty);
    }

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(DocumentError::NotAMapping(type_name(&other))),
    }
}

/// Human-readable name of a YAML value's type
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}
