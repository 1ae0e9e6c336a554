//! Structured decode failures.

use dynshape_path::{format_path, PathStep};
use thiserror::Error;

use crate::constants::DecodeError;

/// A localized decode failure.
///
/// Carries the failure code, the full path from the schema root to the
/// point of divergence, and the expected/actual kind names. Failures are
/// diagnostic only; nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} at \"{}\": expected {}, found {}", .code.name(), format_path(.path), .expected, .actual)]
pub struct DecodeFailure {
    /// Failure code.
    pub code: DecodeError,
    /// Path from the schema root to the point of divergence.
    pub path: Vec<PathStep>,
    /// Kind the schema required at the path.
    pub expected: &'static str,
    /// Shape actually found (or "missing" for an absent required key).
    pub actual: &'static str,
}

impl DecodeFailure {
    pub fn new(
        code: DecodeError,
        path: Vec<PathStep>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self {
            code,
            path,
            expected,
            actual,
        }
    }

    /// The failure path formatted as a pointer string.
    pub fn pointer(&self) -> String {
        format_path(&self.path)
    }
}
