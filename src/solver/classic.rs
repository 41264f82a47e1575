//! Matrix-reduction Hungarian solver.
//!
//! # Algorithm
//!
//! The textbook reduce-and-cover Hungarian method: convert profits to costs,
//! subtract each row's and column's minimum, then alternate between matching
//! rows to zero-cost columns and adjusting the matrix by the smallest
//! uncovered value until a complete zero-cost matching exists.
//!
//! The matching pass seeds greedily (first zero in a free column, row order)
//! and then grows to a maximum zero-matching along alternating paths. The
//! cover is the König construction from the rows left unmatched, which
//! guarantees the adjustment step always has an uncovered cell to work with.
//!
//! # Exact arithmetic
//!
//! The reduce/adjust cycle adds and subtracts the same scalar across rows and
//! columns and then compares entries to zero. Floating-point drift breaks
//! that zero-recognition around 100×100 inputs, so costs are promoted to
//! fixed-point `i128` values (scale 1e9) up front; every subsequent
//! operation is integer and therefore exact.
//!
//! # Complexity
//!
//! O(n⁴).

use crate::error::{Error, Result};
use crate::models::{Assignment, ProfitMatrix};

/// Fixed-point resolution. At 1e9 a 100×100 matrix of values below 1e3
/// accumulates at most ~1e-7 of rounding across a full assignment, far
/// inside the 1e-3 agreement tolerance the solver family promises.
const SCALE: f64 = 1e9;

/// Solves the assignment problem by matrix reduction and cover adjustment.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::classic;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = classic(&m).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// ```
pub fn classic(matrix: &ProfitMatrix) -> Result<Assignment> {
    let n = matrix.size();
    if n == 0 {
        return Assignment::new(Vec::new());
    }

    // Profit to cost, promoted to fixed point
    let max = matrix.max_entry();
    let mut cost: Vec<i128> = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cost.push(((max - matrix.get(i, j)) * SCALE).round() as i128);
        }
    }

    // Row reduction
    for i in 0..n {
        let row = &cost[i * n..(i + 1) * n];
        let min = row.iter().copied().min().unwrap_or(0);
        for j in 0..n {
            cost[i * n + j] -= min;
        }
    }
    // Column reduction
    for j in 0..n {
        let min = (0..n).map(|i| cost[i * n + j]).min().unwrap_or(0);
        for i in 0..n {
            cost[i * n + j] -= min;
        }
    }

    loop {
        let (row_match, col_match, matched) = zero_matching(&cost, n);
        if matched == n {
            let mut row_to_col = Vec::with_capacity(n);
            for (i, m) in row_match.iter().enumerate() {
                row_to_col.push(m.ok_or_else(|| {
                    Error::Internal(format!("complete matching left row {i} unmatched"))
                })?);
            }
            return Assignment::new(row_to_col);
        }

        let (row_reach, col_reach) = reachability(&cost, n, &row_match, &col_match);

        // Smallest cost over reachable rows and unreachable columns
        let mut delta = i128::MAX;
        for i in 0..n {
            if !row_reach[i] {
                continue;
            }
            for j in 0..n {
                if !col_reach[j] {
                    delta = delta.min(cost[i * n + j]);
                }
            }
        }
        if delta == i128::MAX || delta <= 0 {
            return Err(Error::Internal(format!(
                "cover adjustment found no positive reduction (delta = {delta})"
            )));
        }

        // Subtract from reachable rows, add to reachable columns. Cells hit
        // by both are unchanged; covered cells never go negative.
        for i in 0..n {
            for j in 0..n {
                if row_reach[i] {
                    cost[i * n + j] -= delta;
                }
                if col_reach[j] {
                    cost[i * n + j] += delta;
                }
            }
        }
        // Matching is discarded and rebuilt from scratch on the next pass
    }
}

/// Maximum matching in the zero-cost subgraph: greedy first-fit seed, then
/// alternating-path augmentation for each row the seed left unmatched.
fn zero_matching(
    cost: &[i128],
    n: usize,
) -> (Vec<Option<usize>>, Vec<Option<usize>>, usize) {
    let mut row_match: Vec<Option<usize>> = vec![None; n];
    let mut col_match: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        for j in 0..n {
            if cost[i * n + j] == 0 && col_match[j].is_none() {
                row_match[i] = Some(j);
                col_match[j] = Some(i);
                break;
            }
        }
    }

    for i in 0..n {
        if row_match[i].is_none() {
            let mut visited = vec![false; n];
            augment(cost, n, i, &mut visited, &mut row_match, &mut col_match);
        }
    }

    let matched = row_match.iter().filter(|m| m.is_some()).count();
    (row_match, col_match, matched)
}

fn augment(
    cost: &[i128],
    n: usize,
    row: usize,
    visited: &mut [bool],
    row_match: &mut [Option<usize>],
    col_match: &mut [Option<usize>],
) -> bool {
    for j in 0..n {
        if cost[row * n + j] != 0 || visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match col_match[j] {
            None => true,
            Some(owner) => augment(cost, n, owner, visited, row_match, col_match),
        };
        if free {
            row_match[row] = Some(j);
            col_match[j] = Some(row);
            return true;
        }
    }
    false
}

/// König reachability from the unmatched rows: a column is reachable through
/// any zero in a reachable row; a row is reachable when it owns a reachable
/// column. Propagates to a fixed point.
fn reachability(
    cost: &[i128],
    n: usize,
    row_match: &[Option<usize>],
    col_match: &[Option<usize>],
) -> (Vec<bool>, Vec<bool>) {
    let mut row_reach: Vec<bool> = row_match.iter().map(|m| m.is_none()).collect();
    let mut col_reach = vec![false; n];

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..n {
            if !row_reach[i] {
                continue;
            }
            for j in 0..n {
                if !col_reach[j] && cost[i * n + j] == 0 {
                    col_reach[j] = true;
                    changed = true;
                }
            }
        }
        for j in 0..n {
            if !col_reach[j] {
                continue;
            }
            if let Some(owner) = col_match[j] {
                if !row_reach[owner] {
                    row_reach[owner] = true;
                    changed = true;
                }
            }
        }
    }

    (row_reach, col_reach)
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
        let a = classic(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[2, 0, 1]);
        assert_eq!(a.total_profit(&m), 24.0);
    }

    #[test]
    fn test_single_entry() {
        let m = ProfitMatrix::from_rows(vec![vec![5.0]]).expect("valid");
        let a = classic(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0]);
    }

    #[test]
    fn test_empty() {
        assert!(classic(&ProfitMatrix::new(0)).expect("solvable").is_empty());
    }

    #[test]
    fn test_equal_entries() {
        let m = ProfitMatrix::from_rows(vec![
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
        ])
        .expect("valid");
        let a = classic(&m).expect("solvable");
        assert_eq!(a.total_profit(&m), 9.0);
    }

    #[test]
    fn test_greedy_seed_needs_augmentation() {
        // Greedy first-fit matches row 0 to column 0, blocking row 1; the
        // alternating-path pass must shift row 0 to column 1.
        let m = ProfitMatrix::from_rows(vec![vec![5.0, 5.0], vec![5.0, 4.0]]).expect("valid");
        let a = classic(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[1, 0]);
        assert_eq!(a.total_profit(&m), 10.0);
    }

    #[test]
    fn test_diagonal_optimum() {
        let mut m = ProfitMatrix::new(5);
        for i in 0..5 {
            m.set(i, i, 10.0);
        }
        let a = classic(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(a.total_profit(&m), 50.0);
    }

    #[test]
    fn test_fractional_profits() {
        let m = ProfitMatrix::from_rows(vec![
            vec![0.1, 0.2, 0.3],
            vec![0.3, 0.1, 0.2],
            vec![0.2, 0.3, 0.1],
        ])
        .expect("valid");
        let a = classic(&m).expect("solvable");
        assert!((a.total_profit(&m) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_negative_profits() {
        // Cost conversion shifts everything non-negative first
        let m = ProfitMatrix::from_rows(vec![vec![-1.0, -2.0], vec![-3.0, -5.0]]).expect("valid");
        let a = classic(&m).expect("solvable");
        // -2 + -3 = -5 beats -1 + -5 = -6
        assert_eq!(a.as_slice(), &[1, 0]);
    }
}
