//! Dataset-wide statistics.

use serde::{Deserialize, Serialize};

use crate::models::round1;
use crate::store::Dataset;

/// Summary figures for the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_hospitals: usize,
    /// Sum of available beds across all hospitals
    pub total_available_beds: u64,
    /// Mean wait time in minutes, rounded to one decimal; 0.0 for an empty dataset
    pub average_wait_time: f64,
    /// Number of hospitals offering emergency services
    pub emergency_services: usize,
}

impl DatasetStats {
    /// Compute statistics for a dataset.
    pub fn compute(dataset: &Dataset) -> Self {
        let total_hospitals = dataset.len();
        let total_available_beds = dataset.iter().map(|h| u64::from(h.available_beds)).sum();
        let total_wait: u64 = dataset.iter().map(|h| u64::from(h.wait_minutes())).sum();
        let emergency_services = dataset.iter().filter(|h| h.emergency_services).count();

        let average_wait_time = if total_hospitals == 0 {
            0.0
        } else {
            round1(total_wait as f64 / total_hospitals as f64)
        };

        Self {
            total_hospitals,
            total_available_beds,
            average_wait_time,
            emergency_services,
        }
    }
}

impl Dataset {
    pub fn stats(&self) -> DatasetStats {
        DatasetStats::compute(self)
    }
}
