//! Request and response bodies for the HTTP API.

use nexus_core::store::DEFAULT_RADIUS_MILES;
use serde::{Deserialize, Serialize};

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "NEXUS Hospital API";

pub const HOSPITAL_NOT_FOUND: &str = "Hospital not found";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in miles
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_MILES
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub message: &'static str,
    pub status: &'static str,
    pub total_hospitals: usize,
}

impl ServiceStatus {
    pub fn running(total_hospitals: usize) -> Self {
        Self {
            message: SERVICE_NAME,
            status: "running",
            total_hospitals,
        }
    }
}

/// List of hospitals with its length.
#[derive(Debug, Clone, Serialize)]
pub struct HospitalList<T: Serialize> {
    pub hospitals: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> From<Vec<T>> for HospitalList<T> {
    fn from(hospitals: Vec<T>) -> Self {
        let count = hospitals.len();
        Self { hospitals, count }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
