//! Runtime shape classification for dynamic values.

use serde_json::Value;

/// The runtime shape of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Sequence,
    Mapping,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the runtime shape of a dynamic value.
///
/// Total and side-effect-free: every dynamic value has exactly one shape.
/// A number classifies as `Int` when its representation is an integer,
/// `Float` otherwise (`1.0` is a float, not an integer).
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Null,
        Value::Bool(_) => Shape::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Shape::Int
            } else {
                Shape::Float
            }
        }
        Value::String(_) => Shape::Text,
        Value::Array(_) => Shape::Sequence,
        Value::Object(_) => Shape::Mapping,
    }
}
