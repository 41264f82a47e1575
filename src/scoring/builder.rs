//! Profit matrix construction from driver and shipment lists.

use crate::models::ProfitMatrix;

use super::score;

/// Builds the square profit matrix for the given drivers and shipments.
///
/// The matrix side is `max(drivers.len(), shipments.len())`; entry `(i, j)`
/// is `score(shipments[j], drivers[i])` for real pairs and `0.0` for the
/// padding rows/columns introduced when the lists have different lengths.
/// The coordinator filters out pairings that involve padding.
///
/// # Examples
///
/// ```
/// use u_assign::scoring::build_matrix;
///
/// let m = build_matrix(&["Alice", "Bob"], &["123 Main St"]);
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 0), 2.0);
/// assert_eq!(m.get(0, 1), 0.0); // padding column
/// ```
pub fn build_matrix<D, S>(drivers: &[D], shipments: &[S]) -> ProfitMatrix
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    let n = drivers.len().max(shipments.len());
    let mut matrix = ProfitMatrix::new(n);
    for (i, driver) in drivers.iter().enumerate() {
        for (j, shipment) in shipments.iter().enumerate() {
            matrix.set(i, j, score(shipment.as_ref(), driver.as_ref()));
        }
    }
    matrix
}
