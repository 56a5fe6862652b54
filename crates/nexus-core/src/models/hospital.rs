//! Hospital record models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bed categories the triage pipeline reasons about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedType {
    Er,
    Pediatric,
    Maternity,
    Total,
}

impl BedType {
    /// Key used for this category in a record's `beds` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            BedType::Er => "er",
            BedType::Pediatric => "pediatric",
            BedType::Maternity => "maternity",
            BedType::Total => "total",
        }
    }
}

/// A single hospital in the dataset.
///
/// Field names on the wire follow the source JSON (`availableBeds`,
/// `waitTime`, `emergency_services`). Keys not modelled here are kept in
/// `extra` and emitted again on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// Latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Longitude in degrees
    #[serde(default)]
    pub lng: f64,
    /// Capacity per bed category (e.g. "er", "pediatric", "total")
    #[serde(default)]
    pub beds: BTreeMap<String, u32>,
    /// Beds currently free across the whole hospital
    #[serde(default, rename = "availableBeds")]
    pub available_beds: u32,
    /// Current wait time in minutes, if reported
    #[serde(default, rename = "waitTime", skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<u32>,
    #[serde(default)]
    pub emergency_services: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Remaining attributes from the source record, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Hospital {
    /// Create a hospital with required fields and everything else empty.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: String::new(),
            state: String::new(),
            lat: 0.0,
            lng: 0.0,
            beds: BTreeMap::new(),
            available_beds: 0,
            wait_time: None,
            emergency_services: false,
            rating: 0.0,
            specialties: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Capacity for an arbitrary bed category. Missing categories read as 0.
    pub fn bed_capacity(&self, bed_type: &str) -> u32 {
        self.beds.get(bed_type).copied().unwrap_or(0)
    }

    /// Capacity for one of the known bed categories.
    pub fn beds_of(&self, bed_type: BedType) -> u32 {
        self.bed_capacity(bed_type.as_str())
    }

    /// Reported wait time, 0 when unknown.
    pub fn wait_minutes(&self) -> u32 {
        self.wait_time.unwrap_or(0)
    }

    /// Wait time used for ranking. Unknown waits rank as the longest.
    pub fn ranking_wait(&self) -> u32 {
        self.wait_time.unwrap_or(UNKNOWN_WAIT_MINUTES)
    }

    pub fn has_availability(&self) -> bool {
        self.available_beds > 0
    }

    /// Whether the available-bed count fits inside the declared total.
    ///
    /// Records without a `total` entry are not checked.
    pub fn is_capacity_consistent(&self) -> bool {
        match self.beds.get(BedType::Total.as_str()) {
            Some(total) => self.available_beds <= *total,
            None => true,
        }
    }

    /// Planar distance in miles from the given point.
    ///
    /// Uses one degree ≈ 69 miles on both axes, which is only meaningful for
    /// short ranges.
    pub fn distance_from(&self, lat: f64, lng: f64) -> f64 {
        ((self.lat - lat).powi(2) + (self.lng - lng).powi(2)).sqrt() * MILES_PER_DEGREE
    }
}

/// Wait assumed for ranking when a record has no `waitTime`.
pub const UNKNOWN_WAIT_MINUTES: u32 = 999;

/// Rough miles per degree of latitude/longitude.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// A hospital annotated with its distance from a query point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NearbyHospital {
    #[serde(flatten)]
    pub hospital: Hospital,
    /// Distance in miles, rounded to one decimal
    pub distance: f64,
}

/// Round to one decimal place.
///
/// Rounds the exact binary value, with ties going to the even digit, so
/// 15.25 becomes 15.2 and 2.675 (stored slightly below) becomes 2.7.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
