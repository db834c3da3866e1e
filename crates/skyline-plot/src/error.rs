//! Error types for the plot pipeline.

use std::fmt;

/// Errors that can occur while preparing a plot.
///
/// The pipeline is designed to degrade rather than fail: malformed values,
/// empty inputs, and unknown palette names are all resolved by substitution.
/// Errors only surface when the caller explicitly opts in (the `Reject`
/// missing-value policy), hands over an invalid request, or supersedes a
/// running invocation.
#[derive(Debug)]
pub enum PlotError {
    /// The request itself is malformed (empty axis field name, etc.).
    InvalidRequest {
        /// Description of what is wrong with the request.
        reason: String,
    },

    /// A record is missing a usable value for an axis field and the
    /// missing-value policy is `Reject`.
    MissingValue {
        /// The configured field name.
        field: String,
        /// Zero-based row index of the offending record.
        row: usize,
    },

    /// The invocation was superseded by a newer one and stopped early.
    Cancelled,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::InvalidRequest { reason } => {
                write!(f, "Invalid plot request: {}", reason)
            }
            PlotError::MissingValue { field, row } => {
                write!(f, "Missing or non-numeric value for field '{}' at row {}", field, row)
            }
            PlotError::Cancelled => {
                write!(f, "Plot invocation was cancelled")
            }
        }
    }
}

impl std::error::Error for PlotError {}

/// Result type alias for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;
