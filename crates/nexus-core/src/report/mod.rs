//! Aggregate reporting over the dataset.

mod stats;

pub use stats::*;
