//! Error types for u-assign.

use thiserror::Error;

/// Result type alias using u-assign's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building matrices or solving assignments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Row-major data length does not match the declared square size.
    #[error("Expected {expected} entries for a {size}x{size} matrix, got {got}")]
    ShapeMismatch {
        /// Declared matrix side.
        size: usize,
        /// Expected number of entries (`size * size`).
        expected: usize,
        /// Actual number of entries supplied.
        got: usize,
    },

    /// A row has a different length than the matrix side.
    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (number of rows).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// A matrix entry is NaN or infinite.
    #[error("Entry at ({row}, {col}) is not finite: {value}")]
    NonFinite {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The non-finite value.
        value: f64,
    },

    /// The matrix is too large for the requested solver.
    #[error("Matrix of size {size} exceeds the solver's limit of {limit}")]
    TooLarge {
        /// Requested matrix side.
        size: usize,
        /// Maximum side the solver accepts.
        limit: usize,
    },

    /// A solver detected a broken internal invariant. This is a bug surface,
    /// not a user error.
    #[error("Internal invariant violated: {0}")]
    Internal(String),
}
