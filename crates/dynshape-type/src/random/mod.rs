//! Random schema-conforming value generation.

pub mod random;

pub use random::Random;
