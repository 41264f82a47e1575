//! Suitability scoring and profit matrix construction.
//!
//! - [`score`] — Suitability score for a (shipment address, driver name) pair
//! - [`street_name`] — Street name extraction from a full address
//! - [`build_matrix`] — Padded square profit matrix from driver/shipment lists

mod builder;
mod score;

pub use builder::build_matrix;
pub use score::{score, street_name};
