//! Assignment coordination for the application layer.
//!
//! - [`assign`] — Optimal driver-shipment pairing with the default solver
//! - [`assign_with`] — Same, with an explicit solver variant

mod coordinator;

pub use coordinator::{assign, assign_with};
