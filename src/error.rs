//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur when building or sampling a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A caller-supplied argument violates the operation's precondition.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },
}

impl CurveError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        CurveError::InvalidInput { reason }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CurveError>;
