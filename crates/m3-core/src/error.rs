// File: crates/m3-core/src/error.rs
// Summary: Fatal error kinds raised by graph construction and geometry computations.

use thiserror::Error;

/// Errors surfaced synchronously to the caller. Advisory conditions go to
/// [`crate::Diagnostics`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// An input does not carry the semantic type its slot requires.
    #[error("expected {field} to be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    /// A range is inverted, empty, or too narrow to divide by.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

impl ChartError {
    pub(crate) fn mismatch(field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { field, expected }
    }

    pub(crate) fn range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
