//! Schema-driven decoding of dynamic values into typed structures.
//!
//! Two collaborating components:
//!
//! - The value classifier ([`classify`] module): determines the runtime
//!   [`Shape`] of a dynamic value and performs the legal scalar coercions.
//! - The structural decoder ([`decode`] module): walks a [`Schema`] in
//!   lock-step with a dynamic value and either materializes a typed
//!   [`DecodedValue`] or fails fast with a [`DecodeFailure`] naming the
//!   exact path where decoding diverged.
//!
//! Schemas are built with [`SchemaBuilder`] (or the global [`S`]) and can
//! be checked for structural integrity with [`validate_schema`]. The
//! [`Random`] generator produces dynamic values conforming to a schema.

pub mod classify;
pub mod constants;
pub mod decode;
pub mod random;
pub mod schema;
pub mod value;

pub use classify::{
    as_scalar, classify, iterate_mapping, iterate_sequence, CoercionError, Scalar, ScalarKind,
    Shape, ShapeError,
};
pub use constants::DecodeError;
pub use decode::{decode, DecodeFailure};
pub use random::Random;
pub use schema::{validate_schema, Schema, SchemaBuilder, S};
pub use value::{DecodedValue, FieldValue, RecordValue};
