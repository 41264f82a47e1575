//! Brute-force reference solver.
//!
//! # Algorithm
//!
//! Enumerates every permutation of `0..n` in lexicographic order and keeps
//! the first one whose total profit is maximal. Exists as the oracle against
//! which the polynomial solvers are cross-validated.
//!
//! # Complexity
//!
//! O(n! · n). Unusable beyond a dozen rows; guarded by
//! [`BRUTE_FORCE_LIMIT`].

use crate::error::{Error, Result};
use crate::models::{Assignment, ProfitMatrix};

/// Largest matrix side [`brute_force`] accepts.
pub const BRUTE_FORCE_LIMIT: usize = 12;

/// Solves the assignment problem by exhaustive permutation search.
///
/// Returns the first maximizing permutation in lexicographic order.
/// Oracle use only: returns [`Error::TooLarge`] when the matrix side
/// exceeds [`BRUTE_FORCE_LIMIT`].
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::brute_force;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = brute_force(&m).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// ```
pub fn brute_force(matrix: &ProfitMatrix) -> Result<Assignment> {
    let n = matrix.size();
    if n > BRUTE_FORCE_LIMIT {
        return Err(Error::TooLarge {
            size: n,
            limit: BRUTE_FORCE_LIMIT,
        });
    }
    if n == 0 {
        return Assignment::new(Vec::new());
    }

    let mut best: Option<(f64, Vec<usize>)> = None;
    let mut partial = Vec::with_capacity(n);
    let mut used = vec![false; n];
    enumerate(matrix, &mut partial, &mut used, 0.0, &mut best);

    let (_, cols) = best.ok_or_else(|| {
        Error::Internal("permutation search visited no complete assignment".to_string())
    })?;
    Assignment::new(cols)
}

/// Depth-first enumeration choosing columns in ascending order, which visits
/// permutations lexicographically. Strict comparison keeps the first
/// maximizer encountered.
fn enumerate(
    matrix: &ProfitMatrix,
    partial: &mut Vec<usize>,
    used: &mut [bool],
    total: f64,
    best: &mut Option<(f64, Vec<usize>)>,
) {
    let n = matrix.size();
    let row = partial.len();
    if row == n {
        match best {
            Some((best_total, _)) if total <= *best_total => {}
            _ => *best = Some((total, partial.clone())),
        }
        return;
    }
    for col in 0..n {
        if used[col] {
            continue;
        }
        used[col] = true;
        partial.push(col);
        enumerate(matrix, partial, used, total + matrix.get(row, col), best);
        partial.pop();
        used[col] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_optimum() {
        let m = ProfitMatrix::from_rows(vec![
            vec![1.0, 2.0, 9.0],
            vec![7.0, 3.0, 4.0],
            vec![5.0, 8.0, 2.0],
        ])
        .expect("valid");
        let a = brute_force(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[2, 0, 1]);
        assert_eq!(a.total_profit(&m), 24.0);
    }

    #[test]
    fn test_single_entry() {
        let m = ProfitMatrix::from_rows(vec![vec![5.0]]).expect("valid");
        let a = brute_force(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0]);
        assert_eq!(a.total_profit(&m), 5.0);
    }

    #[test]
    fn test_empty() {
        let a = brute_force(&ProfitMatrix::new(0)).expect("solvable");
        assert!(a.is_empty());
    }

    #[test]
    fn test_ties_take_lexicographically_first() {
        // All permutations score 9; identity comes first lexicographically
        let m = ProfitMatrix::from_rows(vec![
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
        ])
        .expect("valid");
        let a = brute_force(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0, 1, 2]);
        assert_eq!(a.total_profit(&m), 9.0);
    }

    #[test]
    fn test_diagonal_optimum() {
        let mut m = ProfitMatrix::new(4);
        for i in 0..4 {
            m.set(i, i, 10.0);
        }
        let a = brute_force(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(a.total_profit(&m), 40.0);
    }

    #[test]
    fn test_too_large() {
        let m = ProfitMatrix::new(BRUTE_FORCE_LIMIT + 1);
        assert_eq!(
            brute_force(&m).expect_err("guarded"),
            Error::TooLarge {
                size: 13,
                limit: 12,
            }
        );
    }
}
