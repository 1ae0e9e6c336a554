//! Decoded value model.

pub mod value;

pub use value::{DecodedValue, FieldValue, RecordValue};
