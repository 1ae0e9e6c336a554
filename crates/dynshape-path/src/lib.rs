//! Decode-path utilities.
//!
//! A decode path locates one node inside a dynamic object graph as an
//! ordered sequence of mapping keys and sequence indices. Paths format to
//! and parse from RFC 6901 style pointer strings, with `~0`/`~1` escaping
//! for key components.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must be absolute or empty")]
    NotAbsolute,
}

/// One step into a dynamic object graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Mapping key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

impl PathStep {
    /// Shorthand constructor for a key step.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

/// Unescapes one path key component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one path key component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Format path steps into an RFC 6901 style pointer string.
///
/// Examples:
/// - `[] -> ""`
/// - `[Key("a/b"), Index(0)] -> "/a~1b/0"`
pub fn format_path(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Parse an absolute pointer string into unescaped path steps.
///
/// All-digit components parse as sequence indices, everything else as
/// mapping keys:
/// - `"" -> []`
/// - `"/" -> [Key("")]`
/// - `"/a~1b/~0k/0" -> [Key("a/b"), Key("~k"), Index(0)]`
pub fn parse_path(pointer: &str) -> Result<Vec<PathStep>, PathError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PathError::NotAbsolute);
    }
    Ok(pointer.split('/').skip(1).map(parse_component).collect())
}

/// Parse pointer with convenience behavior:
/// - relative strings are accepted by prefixing `/`.
pub fn parse_path_relaxed(pointer: &str) -> Result<Vec<PathStep>, PathError> {
    if pointer.starts_with('/') || pointer.is_empty() {
        return parse_path(pointer);
    }
    let mut absolute = String::with_capacity(pointer.len() + 1);
    absolute.push('/');
    absolute.push_str(pointer);
    parse_path(&absolute)
}

fn parse_component(component: &str) -> PathStep {
    if !component.is_empty() && component.bytes().all(|byte| byte.is_ascii_digit()) {
        if let Ok(index) = component.parse::<usize>() {
            return PathStep::Index(index);
        }
    }
    PathStep::Key(unescape_component(component))
}

/// Walk a dynamic value by path.
///
/// Returns the located subvalue, or `None` when any step has no target
/// (missing key, out-of-range index, or a step into a scalar).
pub fn find<'a>(value: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = value;
    for step in path {
        current = match step {
            PathStep::Key(key) => current.as_object()?.get(key)?,
            PathStep::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}
