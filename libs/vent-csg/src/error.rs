//! # Construction Errors
//!
//! Error types raised while building primitives and placements.

use thiserror::Error;

/// Errors that can occur while constructing a solid tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsgError {
    /// The requested primitive collapses to nothing.
    #[error("Degenerate {shape}: {reason}")]
    DegenerateShape {
        /// Name of the primitive builder.
        shape: &'static str,
        /// What made it degenerate.
        reason: String,
    },

    /// A builder argument is negative, non-finite or otherwise unusable.
    #[error("Invalid argument {name} = {value}: {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Supplied value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// A linear tiling step that would never reach the end of its span.
    #[error("Linear step must be positive and finite, got {0}")]
    NonPositiveStep(f64),

    /// A linear tiling whose step is too small for its span.
    #[error("Tiling {span} in steps of {step} needs more than {limit} instances")]
    TooManyTiles {
        /// Full length covered, twice the extent.
        span: f64,
        /// Requested step.
        step: f64,
        /// Instance limit.
        limit: usize,
    },
}

/// Result type alias for construction operations.
pub type CsgResult<T> = Result<T, CsgError>;

/// Rejects negative or non-finite lengths.
pub(crate) fn non_negative(name: &'static str, value: f64) -> CsgResult<f64> {
    if !value.is_finite() {
        return Err(CsgError::InvalidArgument {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(CsgError::InvalidArgument {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Rejects zero, negative or non-finite lengths.
pub(crate) fn positive(name: &'static str, value: f64) -> CsgResult<f64> {
    if non_negative(name, value)? == 0.0 {
        return Err(CsgError::InvalidArgument {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

// =============================================================================
// TESTS
// =============================================================================
