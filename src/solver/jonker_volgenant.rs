//! Jonker-Volgenant successive shortest path solver.
//!
//! # Algorithm
//!
//! Maintains a row potential and a column potential such that every edge's
//! reduced cost `cost[i][j] - row_pot[i] - col_pot[j]` stays non-negative.
//! Each stage introduces one row and runs a Dijkstra-like scan over columns:
//! the cheapest reduced-cost column is visited, potentials are shifted by
//! that amount so the frontier stays non-negative, and the scan repeats from
//! the newly visited column's owner until an unassigned column is reached.
//! A breadcrumb trail of predecessor columns then augments the matching
//! along the discovered path.
//!
//! Arrays are 1-indexed with column 0 as a sentinel for "unassigned": the
//! stage starts by parking the new row on column 0, and augmentation stops
//! when the trail walks back to it.
//!
//! # Complexity
//!
//! O(n³): n stages, each visiting up to n columns with an O(n) scan per
//! visit.
//!
//! # Reference
//!
//! Jonker, R. and Volgenant, A. (1987). "A shortest augmenting path
//! algorithm for dense and sparse linear assignment problems",
//! *Computing* 38(4), 325-340.

use crate::error::{Error, Result};
use crate::models::{Assignment, ProfitMatrix};

/// Solves the assignment problem by shortest augmenting paths with vertex
/// potentials. This is the default and fastest exact solver.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::jonker_volgenant;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = jonker_volgenant(&m).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// assert_eq!(a.total_profit(&m), 24.0);
/// ```
pub fn jonker_volgenant(matrix: &ProfitMatrix) -> Result<Assignment> {
    let n = matrix.size();
    if n == 0 {
        return Assignment::new(Vec::new());
    }

    // 1-indexed (n+1)×(n+1) cost table with row and column 0 zero-filled
    let w = n + 1;
    let max = matrix.max_entry();
    let mut cost = vec![0.0; w * w];
    for i in 1..=n {
        for j in 1..=n {
            cost[i * w + j] = max - matrix.get(i - 1, j - 1);
        }
    }

    let mut row_pot = vec![0.0; w];
    let mut col_pot = vec![0.0; w];
    // col_assignment[j] = row owning column j; 0 = unassigned
    let mut col_assignment = vec![0usize; w];
    let mut prev = vec![0usize; w];
    let mut cheapest = vec![0.0f64; w];
    let mut visited = vec![false; w];

    for r in 1..=n {
        col_assignment[0] = r;
        let mut cur = 0usize;
        cheapest.fill(f64::INFINITY);
        visited.fill(false);

        loop {
            visited[cur] = true;
            let owner = col_assignment[cur];

            // Relax reduced costs from the current owner, tracking the
            // cheapest unvisited column; first index wins ties
            let mut delta = f64::INFINITY;
            let mut next = 0usize;
            for j in 1..=n {
                if visited[j] {
                    continue;
                }
                let reduced = cost[owner * w + j] - row_pot[owner] - col_pot[j];
                if reduced < cheapest[j] {
                    cheapest[j] = reduced;
                    prev[j] = cur;
                }
                if cheapest[j] < delta {
                    delta = cheapest[j];
                    next = j;
                }
            }
            if !delta.is_finite() {
                return Err(Error::Internal(
                    "augmenting scan ran out of columns".to_string(),
                ));
            }

            // Shift potentials by delta; keeps every reduced cost >= 0
            for j in 0..=n {
                if visited[j] {
                    row_pot[col_assignment[j]] += delta;
                    col_pot[j] -= delta;
                } else {
                    cheapest[j] -= delta;
                }
            }

            cur = next;
            if col_assignment[cur] == 0 {
                break;
            }
        }

        // Augment along the breadcrumb trail back to the sentinel
        while cur != 0 {
            let p = prev[cur];
            col_assignment[cur] = col_assignment[p];
            cur = p;
        }
    }

    // Invert to row-to-column and strip the 1-indexing
    let mut row_to_col = vec![0usize; n];
    for j in 1..=n {
        let row = col_assignment[j];
        if row == 0 {
            return Err(Error::Internal(format!(
                "column {} unassigned after all stages",
                j - 1
            )));
        }
        row_to_col[row - 1] = j - 1;
    }
    Assignment::new(row_to_col)
}
