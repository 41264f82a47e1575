//! Assignment problem solvers.
//!
//! Five interchangeable variants that must agree on the total score of the
//! assignment they return (the chosen assignment may differ when the optimum
//! is not unique):
//!
//! - [`jonker_volgenant`] — Successive shortest paths with potentials, O(n³)
//! - [`bellman_ford`] — Successive shortest paths on a per-stage graph, O(n⁴)
//! - [`classic`] — Matrix-reduction Hungarian with exact arithmetic, O(n⁴)
//! - [`kuhn_munkres`] — Kuhn-Munkres on a bipartite matching primitive, O(n³)
//! - [`brute_force`] — Permutation enumeration, O(n!), reference oracle

mod bellman_ford;
mod brute_force;
mod classic;
mod jonker_volgenant;
mod kuhn_munkres;

pub use bellman_ford::bellman_ford;
pub use brute_force::{brute_force, BRUTE_FORCE_LIMIT};
pub use classic::classic;
pub use jonker_volgenant::jonker_volgenant;
pub use kuhn_munkres::kuhn_munkres;

use crate::error::Result;
use crate::models::{Assignment, ProfitMatrix};

/// Selects which solver [`solve`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverVariant {
    /// Jonker-Volgenant successive shortest paths (default).
    #[default]
    JonkerVolgenant,
    /// Successive shortest paths via Bellman-Ford.
    BellmanFord,
    /// Matrix-reduction Hungarian with exact arithmetic.
    Classic,
    /// Kuhn-Munkres bipartite matching.
    KuhnMunkres,
    /// Brute-force permutation enumeration (small matrices only).
    BruteForce,
}

/// Solves the assignment problem for the given profit matrix.
///
/// Returns a permutation mapping each row to a distinct column such that the
/// sum of selected entries is maximal.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::{solve, SolverVariant};
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = solve(&m, SolverVariant::default()).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// assert_eq!(a.total_profit(&m), 24.0);
/// ```
pub fn solve(matrix: &ProfitMatrix, variant: SolverVariant) -> Result<Assignment> {
    match variant {
        SolverVariant::JonkerVolgenant => jonker_volgenant(matrix),
        SolverVariant::BellmanFord => bellman_ford(matrix),
        SolverVariant::Classic => classic(matrix),
        SolverVariant::KuhnMunkres => kuhn_munkres(matrix),
        SolverVariant::BruteForce => brute_force(matrix),
    }
}

/// Converts profits into non-negative costs: `cost = max_entry - profit`.
///
/// Adds the same constant to every complete assignment, so the argmax
/// assignment of the profit matrix is the argmin assignment of the returned
/// row-major cost table.
pub(crate) fn cost_matrix(matrix: &ProfitMatrix) -> Vec<f64> {
    let n = matrix.size();
    let max = matrix.max_entry();
    let mut cost = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cost.push(max - matrix.get(i, j));
        }
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_matrix() -> ProfitMatrix {
        ProfitMatrix::from_rows(vec![
            vec![1.0, 2.0, 9.0],
            vec![7.0, 3.0, 4.0],
            vec![5.0, 8.0, 2.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_default_variant_is_jv() {
        assert_eq!(SolverVariant::default(), SolverVariant::JonkerVolgenant);
    }

    #[test]
    fn test_dispatch_all_variants() {
        let m = known_matrix();
        for variant in [
            SolverVariant::JonkerVolgenant,
            SolverVariant::BellmanFord,
            SolverVariant::Classic,
            SolverVariant::KuhnMunkres,
            SolverVariant::BruteForce,
        ] {
            let a = solve(&m, variant).expect("solvable");
            assert_eq!(a.as_slice(), &[2, 0, 1], "{variant:?}");
            assert_eq!(a.total_profit(&m), 24.0, "{variant:?}");
        }
    }

    #[test]
    fn test_cost_matrix_non_negative() {
        let m = known_matrix();
        let cost = cost_matrix(&m);
        assert!(cost.iter().all(|&c| c >= 0.0));
        // max entry maps to zero cost
        assert_eq!(cost[2], 0.0);
        assert_eq!(cost[0], 8.0);
    }

    #[test]
    fn test_cost_matrix_empty() {
        assert!(cost_matrix(&ProfitMatrix::new(0)).is_empty());
    }
}
