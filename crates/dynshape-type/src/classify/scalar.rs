//! Scalar coercion and container iteration for dynamic values.

use serde_json::{Map, Value};
use thiserror::Error;

use super::shape::{classify, Shape};

/// The scalar kind a schema node can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    Str,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A native scalar extracted from a dynamic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Unsupported scalar kind pairing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot coerce {actual} into {expected}")]
pub struct CoercionError {
    pub expected: ScalarKind,
    pub actual: Shape,
}

/// Value shape does not support the requested iteration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {actual}")]
pub struct ShapeError {
    pub expected: Shape,
    pub actual: Shape,
}

/// Attempt to produce a native scalar of the requested kind.
///
/// Coercion rules, in order of strictness:
/// - booleans and text only from their native shapes (no truthy coercion,
///   no number/string conversions);
/// - integers only from native integers; a float is rejected even when
///   integral, and an integer outside the `i64` range is unrepresentable;
/// - floats from a native float or a losslessly widened integer.
///
/// Any other pairing is a [`CoercionError`] naming the expected kind and
/// actual shape.
pub fn as_scalar(value: &Value, expected: ScalarKind) -> Result<Scalar, CoercionError> {
    let actual = classify(value);
    let scalar = match (expected, value) {
        (ScalarKind::Bool, Value::Bool(b)) => Some(Scalar::Bool(*b)),
        (ScalarKind::Int, Value::Number(n)) if actual == Shape::Int => n.as_i64().map(Scalar::Int),
        (ScalarKind::Float, Value::Number(n)) => n.as_f64().map(Scalar::Float),
        (ScalarKind::Str, Value::String(s)) => Some(Scalar::Text(s.clone())),
        _ => None,
    };
    scalar.ok_or(CoercionError { expected, actual })
}

/// Borrow the elements of a sequence-shaped dynamic value.
pub fn iterate_sequence(value: &Value) -> Result<&[Value], ShapeError> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| ShapeError {
        expected: Shape::Sequence,
        actual: classify(value),
    })
}

/// Borrow the entries of a mapping-shaped dynamic value.
pub fn iterate_mapping(value: &Value) -> Result<&Map<String, Value>, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError {
        expected: Shape::Mapping,
        actual: classify(value),
    })
}
