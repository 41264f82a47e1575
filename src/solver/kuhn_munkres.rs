//! Kuhn-Munkres solver on a weighted bipartite matching primitive.
//!
//! # Algorithm
//!
//! Frames the profit matrix as a complete weighted bipartite graph between
//! row nodes and column nodes, with each edge carrying the *negated* profit
//! (the primitive minimizes), and hands the matching itself to the proven
//! Kuhn-Munkres implementation in the `pathfinding` crate. The interesting
//! work here is only the weight assembly and result interpretation.
//!
//! The primitive needs ordered weights, so profits are scaled to `i64`
//! fixed-point values and clamped against overflow.
//!
//! # Complexity
//!
//! O(n³) inside the primitive.

use pathfinding::kuhn_munkres::{kuhn_munkres_min, Weights};

use crate::error::Result;
use crate::models::{Assignment, ProfitMatrix};

/// Fixed-point resolution for the i64 weights. Rounding error stays below
/// n · 5e-7 for an n×n matrix, inside the family's 1e-3 tolerance.
const SCALE: f64 = 1_000_000.0;

/// Row-major negated-profit weights for the matching primitive.
struct NegatedProfits {
    data: Vec<i64>,
    size: usize,
}

impl Weights<i64> for NegatedProfits {
    fn rows(&self) -> usize {
        self.size
    }

    fn columns(&self) -> usize {
        self.size
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    fn neg(&self) -> Self {
        Self {
            data: self.data.iter().map(|&w| w.saturating_neg()).collect(),
            size: self.size,
        }
    }
}

/// Scales a profit to an i64 weight, clamping instead of overflowing.
fn to_weight(profit: f64) -> i64 {
    let w = (profit * SCALE).round();
    if w >= i64::MAX as f64 {
        i64::MAX
    } else if w <= i64::MIN as f64 {
        i64::MIN
    } else {
        w as i64
    }
}

/// Solves the assignment problem via minimum-weight perfect bipartite
/// matching over negated profits.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::kuhn_munkres;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = kuhn_munkres(&m).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// ```
pub fn kuhn_munkres(matrix: &ProfitMatrix) -> Result<Assignment> {
    let n = matrix.size();
    if n == 0 {
        return Assignment::new(Vec::new());
    }

    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            data.push(to_weight(-matrix.get(i, j)));
        }
    }
    let weights = NegatedProfits { data, size: n };

    let (_, row_to_col) = kuhn_munkres_min(&weights);
    Assignment::new(row_to_col)
}
