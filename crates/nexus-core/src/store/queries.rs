//! Direct dataset queries used outside the triage pipeline.

use serde::{Deserialize, Serialize};

use super::Dataset;
use crate::models::{round1, Hospital, NearbyHospital};

/// Default search radius in miles for nearby queries.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Attribute filter over the dataset. Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HospitalFilter {
    /// Bed category that must have capacity; "all" disables the check
    #[serde(default, rename = "bedType")]
    pub bed_type: Option<String>,
    /// When true, only hospitals with free beds
    #[serde(default)]
    pub available: Option<bool>,
    /// When true, only hospitals offering emergency services
    #[serde(default)]
    pub emergency: Option<bool>,
}

impl HospitalFilter {
    /// Check a single record against every set constraint.
    pub fn matches(&self, hospital: &Hospital) -> bool {
        if let Some(bed_type) = self.bed_type.as_deref() {
            if !bed_type.is_empty() && bed_type != "all" && hospital.bed_capacity(bed_type) == 0 {
                return false;
            }
        }

        if self.available == Some(true) && !hospital.has_availability() {
            return false;
        }

        if self.emergency == Some(true) && !hospital.emergency_services {
            return false;
        }

        true
    }
}

impl Dataset {
    /// Look up a hospital by id. The first record with that id wins.
    pub fn get(&self, id: i64) -> Option<&Hospital> {
        self.iter().find(|h| h.id == id)
    }

    /// Hospitals within `radius` miles of a point, closest first.
    ///
    /// The radius check uses the exact distance; ordering uses the rounded
    /// distance reported to callers, so equal rounded distances keep dataset
    /// order.
    pub fn nearby(&self, lat: f64, lng: f64, radius: f64) -> Vec<NearbyHospital> {
        let mut nearby: Vec<NearbyHospital> = self
            .iter()
            .filter_map(|hospital| {
                let distance = hospital.distance_from(lat, lng);
                (distance <= radius).then(|| NearbyHospital {
                    hospital: hospital.clone(),
                    distance: round1(distance),
                })
            })
            .collect();

        nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        nearby
    }

    /// Hospitals matching the filter, in dataset order.
    pub fn filter(&self, filter: &HospitalFilter) -> Vec<&Hospital> {
        self.iter().filter(|h| filter.matches(h)).collect()
    }
}
