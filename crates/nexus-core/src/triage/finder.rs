//! Shortlist selection.
//!
//! Filters the dataset with a tier-specific predicate, orders the survivors
//! and keeps the first `MAX_SHORTLIST` entries.

use std::cmp::{Ordering, Reverse};

use crate::models::{BedType, Classification, Hospital, SymptomCategory, Urgency};

/// Maximum number of hospitals handed to the recommender.
pub const MAX_SHORTLIST: usize = 10;

/// Finder for hospitals suited to a classification.
pub struct Finder<'a> {
    hospitals: &'a [Hospital],
}

impl<'a> Finder<'a> {
    /// Create a finder over a slice of hospitals.
    pub fn new(hospitals: &'a [Hospital]) -> Self {
        Self { hospitals }
    }

    /// Build the ordered shortlist for a classification.
    pub fn find(&self, classification: Classification) -> Vec<&'a Hospital> {
        let mut shortlist: Vec<&'a Hospital> = self
            .hospitals
            .iter()
            .filter(|h| accepts(h, classification))
            .collect();

        // sort_by is stable, so exact ties keep dataset order
        shortlist.sort_by(|a, b| compare(a, b, classification));
        shortlist.truncate(MAX_SHORTLIST);
        shortlist
    }
}

/// Filter the given hospitals for a classification.
pub fn find(hospitals: &[Hospital], classification: Classification) -> Vec<&Hospital> {
    Finder::new(hospitals).find(classification)
}

/// Filter predicate for a classification.
pub fn accepts(hospital: &Hospital, classification: Classification) -> bool {
    if classification.urgency == Urgency::Critical {
        return hospital.emergency_services && hospital.beds_of(BedType::Er) > 0;
    }

    match classification.category {
        SymptomCategory::Pediatric => {
            hospital.beds_of(BedType::Pediatric) > 0 && hospital.has_availability()
        }
        SymptomCategory::Maternity => {
            hospital.beds_of(BedType::Maternity) > 0 && hospital.has_availability()
        }
        _ => hospital.has_availability(),
    }
}

/// Ordering where the preferred hospital compares as `Less`.
fn compare(a: &Hospital, b: &Hospital, classification: Classification) -> Ordering {
    if classification.urgency == Urgency::Urgent
        && classification.category == SymptomCategory::UrgentGeneral
    {
        // Emergency-capable first, then most availability
        let key = |h: &Hospital| Reverse((h.emergency_services, h.available_beds));
        key(a).cmp(&key(b))
    } else {
        // Most availability first, then shortest wait
        let key = |h: &Hospital| (Reverse(h.available_beds), h.ranking_wait());
        key(a).cmp(&key(b))
    }
}
