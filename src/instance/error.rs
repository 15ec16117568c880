//! Input validation errors.

use std::fmt;

use thiserror::Error;

/// Which raw input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capacity,
    Weights,
    Values,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Capacity => write!(f, "capacity"),
            Field::Weights => write!(f, "weights"),
            Field::Values => write!(f, "values"),
        }
    }
}

/// Errors raised while turning raw text fields into a
/// [`ProblemInstance`](super::ProblemInstance).
///
/// This is the only recoverable failure in the crate: callers present
/// the `Display` message to the user and let them correct the input.
/// Each rejection carries enough context (field, offending token or
/// value, both list lengths) to produce a distinct message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The field was empty or contained only whitespace.
    #[error("{field} cannot be empty")]
    Empty { field: Field },

    /// A token did not parse as an integer.
    #[error("{field}: '{token}' is not a valid integer")]
    NotAnInteger { field: Field, token: String },

    /// The field split into no usable tokens (e.g. only separators).
    #[error("no valid {field} found")]
    NoNumbers { field: Field },

    /// A parsed number was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: Field, value: i64 },

    /// A parsed number does not fit the supported integer range.
    #[error("{field}: {token} is out of range")]
    OutOfRange { field: Field, token: String },

    /// The weights and values lists have different lengths.
    #[error("number of weights ({weights}) must equal number of values ({values})")]
    LengthMismatch { weights: usize, values: usize },
}
