//! Coordinator from driver/shipment lists to assignment triples.

use crate::error::Result;
use crate::models::DriverAssignment;
use crate::scoring::build_matrix;
use crate::solver::{solve, SolverVariant};

/// Computes the optimal driver-shipment assignment with the default solver.
///
/// Builds the padded profit matrix, solves it, and returns one
/// [`DriverAssignment`] per real pairing in driver order. When the lists
/// have different lengths, the surplus drivers or shipments are simply
/// absent from the result. This is the single entry point the application
/// layer consumes.
///
/// # Examples
///
/// ```
/// use u_assign::dispatch::assign;
///
/// let pairs = assign(
///     &["Alice", "Bob"],
///     &["123 Main St", "10 Oak Avenue Suite 5"],
/// ).unwrap();
///
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].driver, "Alice");
/// assert_eq!(pairs[0].shipment, "10 Oak Avenue Suite 5");
/// assert_eq!(pairs[0].score, 6.75);
/// assert_eq!(pairs[1].driver, "Bob");
/// assert_eq!(pairs[1].shipment, "123 Main St");
/// ```
pub fn assign<D, S>(drivers: &[D], shipments: &[S]) -> Result<Vec<DriverAssignment>>
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    assign_with(drivers, shipments, SolverVariant::default())
}

/// Computes the optimal driver-shipment assignment with the given solver.
///
/// Solver errors propagate unchanged to the caller.
pub fn assign_with<D, S>(
    drivers: &[D],
    shipments: &[S],
    variant: SolverVariant,
) -> Result<Vec<DriverAssignment>>
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    let matrix = build_matrix(drivers, shipments);
    if matrix.is_empty() {
        return Ok(Vec::new());
    }
    let assignment = solve(&matrix, variant)?;

    let mut pairs = Vec::with_capacity(drivers.len().min(shipments.len()));
    for (row, col) in assignment.iter() {
        if row < drivers.len() && col < shipments.len() {
            pairs.push(DriverAssignment {
                driver: drivers[row].as_ref().to_string(),
                shipment: shipments[col].as_ref().to_string(),
                score: matrix.get(row, col),
            });
        }
    }
    Ok(pairs)
}
