//! Assignment result types.

use crate::error::{Error, Result};
use crate::models::ProfitMatrix;

/// A one-to-one row-to-column mapping produced by a solver.
///
/// Position `i` holds the column matched to row `i`. Construction validates
/// the permutation invariant: every value lies in `[0, n)` and all values
/// are distinct. Solvers rely on this as their final sanity check — a solver
/// that produces a non-permutation surfaces [`Error::Internal`] instead of
/// returning a wrong answer.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Assignment, ProfitMatrix};
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = Assignment::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(a.column_of(0), 2);
/// assert_eq!(a.total_profit(&m), 24.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    row_to_col: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment from a row-to-column mapping.
    ///
    /// Returns [`Error::Internal`] if the mapping is not a permutation of
    /// `0..n`.
    pub fn new(row_to_col: Vec<usize>) -> Result<Self> {
        let n = row_to_col.len();
        let mut seen = vec![false; n];
        for (row, &col) in row_to_col.iter().enumerate() {
            if col >= n {
                return Err(Error::Internal(format!(
                    "row {row} assigned to column {col}, outside 0..{n}"
                )));
            }
            if seen[col] {
                return Err(Error::Internal(format!(
                    "column {col} assigned to more than one row"
                )));
            }
            seen[col] = true;
        }
        Ok(Self { row_to_col })
    }

    /// The column matched to the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn column_of(&self, row: usize) -> usize {
        self.row_to_col[row]
    }

    /// The underlying row-to-column mapping.
    pub fn as_slice(&self) -> &[usize] {
        &self.row_to_col
    }

    /// Number of matched rows.
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    /// Returns `true` if no rows are matched.
    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }

    /// Iterates over `(row, column)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }

    /// Sum of the matrix entries selected by this assignment.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is smaller than this assignment.
    pub fn total_profit(&self, matrix: &ProfitMatrix) -> f64 {
        self.iter().map(|(row, col)| matrix.get(row, col)).sum()
    }
}

/// A single driver-shipment pairing with its suitability score.
///
/// Produced by [`dispatch::assign`](crate::dispatch::assign) for the
/// application layer; padding rows and columns are already filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverAssignment {
    /// Driver name.
    pub driver: String,
    /// Shipment destination address.
    pub shipment: String,
    /// Suitability score of this pairing.
    pub score: f64,
}
