//! Schema AST module.

pub mod builder;
pub mod schema;
pub mod validate;

pub use builder::{SchemaBuilder, S};
pub use schema::*;
pub use validate::validate_schema;
