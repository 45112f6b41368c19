//! Error types for numeral spelling and time phrasing.

use thiserror::Error;

/// An error raised by any rutils operation.
///
/// Operations are pure, so an error is never transient: retrying with the
/// same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutilsError {
    /// The caller passed an argument outside the supported domain (negative
    /// amount, fewer than three plural forms, unknown accuracy level, birth
    /// date in the future, unparseable date).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A branch that should be unreachable was reached.
    #[error("internal inconsistency: {message}")]
    InternalInconsistency { message: String },
}

impl RutilsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::InternalInconsistency {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
