//! Structural decoder.

pub mod decoder;
pub mod error;

pub use decoder::decode;
pub use error::DecodeFailure;
