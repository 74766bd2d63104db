//! Opt-in validation errors
//!
//! The plain vector operations never fail: degenerate input propagates
//! IEEE-754 Inf/NaN. Callers that want a hard failure instead use the
//! `try_` variants, which report through this type.

use std::fmt;

/// Error type for the checked vector operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The vector has zero length and has no direction
    ZeroLength,
    /// The length overflowed or a component is NaN/Inf
    NonFinite {
        /// The offending length, widened to f64
        length: f64,
    },
}

impl MathError {
    /// Classify a vector length, `None` when it can be divided by
    pub(crate) fn check_length(length: f64) -> Option<Self> {
        if !length.is_finite() {
            Some(MathError::NonFinite { length })
        } else if length == 0.0 {
            Some(MathError::ZeroLength)
        } else {
            None
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "Cannot normalize a zero-length vector"),
            MathError::NonFinite { length } => {
                write!(f, "Cannot normalize a vector with non-finite length: {}", length)
            }
        }
    }
}

impl std::error::Error for MathError {}
