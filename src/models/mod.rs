//! Core data types for the assignment problem.
//!
//! Provides the square profit matrix consumed by solvers, the permutation
//! result type they return, and the driver-shipment pairing handed back to
//! the application layer.

mod assignment;
mod matrix;

pub use assignment::{Assignment, DriverAssignment};
pub use matrix::ProfitMatrix;
