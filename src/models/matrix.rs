//! Dense square profit matrix.

use crate::error::{Error, Result};

/// A square n×n profit matrix stored in row-major order.
///
/// Entry `(i, j)` is the profit of assigning row `i` (driver) to column `j`
/// (shipment). All entries are finite; NaN and ±∞ are rejected at
/// construction. `n = 0` is a valid (empty) matrix.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(0, 2), 9.0);
/// assert_eq!(m.max_entry(), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitMatrix {
    data: Vec<f64>,
    size: usize,
}

impl ProfitMatrix {
    /// Creates a profit matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a profit matrix from a list of rows.
    ///
    /// Returns [`Error::RaggedRow`] if any row's length differs from the
    /// number of rows, or [`Error::NonFinite`] if any entry is NaN or ±∞.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: size,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::validate_finite(&data, size)?;
        Ok(Self { data, size })
    }

    /// Creates a profit matrix from an explicit row-major n×n grid.
    ///
    /// Returns [`Error::ShapeMismatch`] if the data length doesn't match
    /// `size * size`, or [`Error::NonFinite`] on a NaN or infinite entry.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::ShapeMismatch {
                size,
                expected: size * size,
                got: data.len(),
            });
        }
        Self::validate_finite(&data, size)?;
        Ok(Self { data, size })
    }

    fn validate_finite(data: &[f64], size: usize) -> Result<()> {
        for (idx, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::NonFinite {
                    row: idx / size.max(1),
                    col: idx % size.max(1),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Returns the profit of assigning row `row` to column `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Sets the profit of assigning row `row` to column `col`.
    pub fn set(&mut self, row: usize, col: usize, profit: f64) {
        self.data[row * self.size + col] = profit;
    }

    /// Side length of this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The largest entry, or `0.0` for an empty matrix.
    ///
    /// Used by solvers to convert profits into non-negative costs via
    /// `max_entry() - profit`.
    pub fn max_entry(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
