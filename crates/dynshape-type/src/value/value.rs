//! Decoded value: the materialized output of a successful decode.

use serde_json::Value as JsonValue;

/// A fully materialized value conforming to the schema it was decoded
/// against.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// Absent marker for optional targets.
    Absent,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Ordered sequence of decoded elements.
    Sequence(Vec<DecodedValue>),
    /// Record-shaped decoded value.
    Record(RecordValue),
}

/// Decoded record value with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    /// Decoded field values in schema declaration order.
    pub fields: Vec<FieldValue>,
}

/// Named decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// Field identifier.
    pub key: String,
    /// Decoded field payload.
    pub value: DecodedValue,
}

impl RecordValue {
    /// Look up a field value by name.
    pub fn get(&self, key: &str) -> Option<&DecodedValue> {
        self.fields.iter().find(|field| field.key == key).map(|field| &field.value)
    }
}

impl DecodedValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DecodedValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Render the decoded value as JSON for diagnostics.
    ///
    /// Absent record fields are omitted from objects; an absent sequence
    /// element or root renders as null so positions are preserved.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Absent => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(n) => JsonValue::from(*n),
            Self::Float(x) => serde_json::Number::from_f64(*x)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Sequence(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Record(record) => {
                let mut map = serde_json::Map::new();
                for field in &record.fields {
                    if field.value.is_absent() {
                        continue;
                    }
                    map.insert(field.key.clone(), field.value.to_json());
                }
                JsonValue::Object(map)
            }
        }
    }
}
