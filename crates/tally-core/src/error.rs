//! Error types for the Tally library.
//!
//! Every analytic operation fails in one of three recoverable ways: the
//! caller supplied bad figures, the item set has no cost to distribute, or a
//! solvency ratio has a zero denominator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for Tally operations.
pub type TallyResult<T> = Result<T, TallyError>;

/// The main error type for Tally operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// A figure is missing, non-numeric, or negative where that is disallowed.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The item set cannot be analysed (no items, or zero grand total).
    #[error("Undefined for this input set: {reason}")]
    DegenerateInput {
        /// Description of the degenerate condition.
        reason: String,
    },

    /// A solvency ratio has a zero denominator.
    #[error("Division by zero in {ratio}")]
    DivisionByZero {
        /// The ratio that could not be computed.
        ratio: String,
    },
}

/// Coarse error category, for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`TallyError::InvalidInput`].
    InvalidInput,
    /// See [`TallyError::DegenerateInput`].
    DegenerateInput,
    /// See [`TallyError::DivisionByZero`].
    DivisionByZero,
}

impl TallyError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a degenerate input error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(ratio: impl Into<String>) -> Self {
        Self::DivisionByZero {
            ratio: ratio.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
        }
    }
}
