//! Successive shortest path solver using Bellman-Ford.
//!
//! # Algorithm
//!
//! Rows are introduced one at a time. For each new row a small directed
//! graph over the columns is built: the source offers the row's cost to
//! every column, a matched column offers to hand its shipment chain onward
//! (the cost delta of moving its current owner elsewhere, which may be
//! negative), and every free column connects to the sink for nothing. The
//! shortest source-to-sink path is the cheapest way to fit the new row in,
//! possibly displacing a chain of earlier rows one column over.
//!
//! Negative deltas rule out Dijkstra, so Bellman-Ford does the path search.
//! Negative cycles cannot arise: the graph is the residual of a matching
//! kept optimal at every stage.
//!
//! # Complexity
//!
//! O(n⁴): n stages, each relaxing O(n²) edges over up to n+1 rounds. Edge
//! storage is reused across stages.

use crate::error::{Error, Result};
use crate::models::{Assignment, ProfitMatrix};

use super::cost_matrix;

struct Edge {
    from: usize,
    to: usize,
    weight: f64,
}

/// Solves the assignment problem by successive shortest augmenting paths.
///
/// # Examples
///
/// ```
/// use u_assign::models::ProfitMatrix;
/// use u_assign::solver::bellman_ford;
///
/// let m = ProfitMatrix::from_rows(vec![
///     vec![1.0, 2.0, 9.0],
///     vec![7.0, 3.0, 4.0],
///     vec![5.0, 8.0, 2.0],
/// ]).unwrap();
///
/// let a = bellman_ford(&m).unwrap();
/// assert_eq!(a.as_slice(), &[2, 0, 1]);
/// ```
pub fn bellman_ford(matrix: &ProfitMatrix) -> Result<Assignment> {
    let n = matrix.size();
    if n == 0 {
        return Assignment::new(Vec::new());
    }

    let cost = cost_matrix(matrix);
    let source = n;
    let sink = n + 1;

    let mut row_match: Vec<Option<usize>> = vec![None; n];
    let mut col_match: Vec<Option<usize>> = vec![None; n];

    let mut edges: Vec<Edge> = Vec::new();
    let mut dist = vec![f64::INFINITY; n + 2];
    let mut pred: Vec<Option<usize>> = vec![None; n + 2];

    for r in 0..n {
        build_stage_graph(&cost, n, r, &col_match, &mut edges);
        shortest_path(&edges, source, &mut dist, &mut pred);

        let path = column_path(&pred, source, sink, n)?;

        // Apply the displacement chain last-to-first so every owner is read
        // before its column changes hands
        for idx in (1..path.len()).rev() {
            let from_col = path[idx - 1];
            let to_col = path[idx];
            let owner = col_match[from_col].ok_or_else(|| {
                Error::Internal(format!("path passes through unowned column {from_col}"))
            })?;
            row_match[owner] = Some(to_col);
            col_match[to_col] = Some(owner);
        }
        let first = path[0];
        row_match[r] = Some(first);
        col_match[first] = Some(r);
    }

    let mut row_to_col = Vec::with_capacity(n);
    for (i, m) in row_match.iter().enumerate() {
        row_to_col.push(
            m.ok_or_else(|| Error::Internal(format!("stage loop left row {i} unmatched")))?,
        );
    }
    Assignment::new(row_to_col)
}

/// Regenerates the stage graph for introducing row `r` into the matching.
fn build_stage_graph(
    cost: &[f64],
    n: usize,
    r: usize,
    col_match: &[Option<usize>],
    edges: &mut Vec<Edge>,
) {
    let source = n;
    let sink = n + 1;
    edges.clear();

    for j in 0..n {
        edges.push(Edge {
            from: source,
            to: j,
            weight: cost[r * n + j],
        });
    }
    for j in 0..n {
        match col_match[j] {
            Some(owner) => {
                // Moving `owner` off column j onto column k
                for k in 0..n {
                    if k != j {
                        edges.push(Edge {
                            from: j,
                            to: k,
                            weight: cost[owner * n + k] - cost[owner * n + j],
                        });
                    }
                }
            }
            None => edges.push(Edge {
                from: j,
                to: sink,
                weight: 0.0,
            }),
        }
    }
}

/// Bellman-Ford over the edge list, filling `dist` and `pred`.
fn shortest_path(edges: &[Edge], source: usize, dist: &mut [f64], pred: &mut [Option<usize>]) {
    dist.fill(f64::INFINITY);
    pred.fill(None);
    dist[source] = 0.0;

    // |V| - 1 rounds; stop early once stable
    for _ in 1..dist.len() {
        let mut changed = false;
        for e in edges {
            let candidate = dist[e.from] + e.weight;
            if candidate < dist[e.to] {
                dist[e.to] = candidate;
                pred[e.to] = Some(e.from);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

/// Reads the column sequence c₁..cₖ off the predecessor trail from sink back
/// to source. An unmatched column always exists, so the sink is reachable in
/// every stage; anything else is a bug.
fn column_path(
    pred: &[Option<usize>],
    source: usize,
    sink: usize,
    n: usize,
) -> Result<Vec<usize>> {
    let mut path = Vec::new();
    let mut node = pred[sink]
        .ok_or_else(|| Error::Internal("sink unreachable in stage graph".to_string()))?;
    let mut steps = 0;
    while node != source {
        path.push(node);
        node = pred[node].ok_or_else(|| {
            Error::Internal(format!("predecessor trail broken at column {node}"))
        })?;
        steps += 1;
        if steps > n {
            return Err(Error::Internal(
                "predecessor trail longer than the column count".to_string(),
            ));
        }
    }
    path.reverse();
    Ok(path)
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
        let a = bellman_ford(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[2, 0, 1]);
        assert_eq!(a.total_profit(&m), 24.0);
    }

    #[test]
    fn test_single_entry() {
        let m = ProfitMatrix::from_rows(vec![vec![5.0]]).expect("valid");
        let a = bellman_ford(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0]);
    }

    #[test]
    fn test_empty() {
        assert!(bellman_ford(&ProfitMatrix::new(0))
            .expect("solvable")
            .is_empty());
    }

    #[test]
    fn test_displacement_chain() {
        // Row 0 takes column 0 first; row 1 only profits from column 0, so
        // the stage-2 path must displace row 0 onto column 1.
        let m = ProfitMatrix::from_rows(vec![vec![5.0, 4.0], vec![5.0, 0.0]]).expect("valid");
        let a = bellman_ford(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[1, 0]);
        assert_eq!(a.total_profit(&m), 9.0);
    }

    #[test]
    fn test_equal_entries_any_permutation() {
        let m = ProfitMatrix::from_rows(vec![
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
            vec![3.0, 3.0, 3.0],
        ])
        .expect("valid");
        let a = bellman_ford(&m).expect("solvable");
        assert_eq!(a.total_profit(&m), 9.0);
    }

    #[test]
    fn test_diagonal_optimum() {
        let mut m = ProfitMatrix::new(4);
        for i in 0..4 {
            m.set(i, i, 10.0);
        }
        let a = bellman_ford(&m).expect("solvable");
        assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(a.total_profit(&m), 40.0);
    }
}
