//! Final pick and justification.
//!
//! Scoring:
//! - critical: ER capacity × 10 − wait time
//! - otherwise: (available beds, rating, −wait time), compared in that order
//!
//! The first hospital in shortlist order wins a tie.

use std::cmp::Ordering;

use crate::models::{BedType, Hospital, Recommendation, Urgency};

/// Reasoning returned when nothing survived the finder.
pub const NO_MATCH_ADVICE: &str =
    "No hospitals found matching your symptoms and urgency. Please call 911 if this is an emergency.";

/// Weight of one ER bed relative to one minute of waiting.
const ER_BED_WEIGHT: i64 = 10;

/// Recommender that picks one hospital from a shortlist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender;

impl Recommender {
    pub fn new() -> Self {
        Self
    }

    /// Pick the best hospital for the urgency tier and explain the choice.
    pub fn recommend<'a>(&self, shortlist: &[&'a Hospital], urgency: Urgency) -> Recommendation<'a> {
        match self.select(shortlist, urgency) {
            Some(best) => Recommendation {
                hospital: Some(best),
                reasoning: explain(best, urgency),
            },
            None => Recommendation {
                hospital: None,
                reasoning: NO_MATCH_ADVICE.to_string(),
            },
        }
    }

    /// Highest-scoring hospital, first one on ties.
    pub fn select<'a>(&self, shortlist: &[&'a Hospital], urgency: Urgency) -> Option<&'a Hospital> {
        let mut best: Option<&'a Hospital> = None;
        for &candidate in shortlist {
            let replace = match best {
                None => true,
                Some(current) => compare(candidate, current, urgency) == Ordering::Greater,
            };
            if replace {
                best = Some(candidate);
            }
        }
        best
    }
}

/// Pick the best hospital with the default recommender.
pub fn recommend<'a>(shortlist: &[&'a Hospital], urgency: Urgency) -> Recommendation<'a> {
    Recommender::new().recommend(shortlist, urgency)
}

/// Critical-tier score. Larger ER capacity dominates, wait time breaks ties.
pub fn critical_score(hospital: &Hospital) -> i64 {
    i64::from(hospital.beds_of(BedType::Er)) * ER_BED_WEIGHT - i64::from(hospital.ranking_wait())
}

fn compare(a: &Hospital, b: &Hospital, urgency: Urgency) -> Ordering {
    match urgency {
        Urgency::Critical => critical_score(a).cmp(&critical_score(b)),
        Urgency::Urgent | Urgency::Routine => a
            .available_beds
            .cmp(&b.available_beds)
            .then_with(|| a.rating.total_cmp(&b.rating))
            .then_with(|| b.ranking_wait().cmp(&a.ranking_wait())),
    }
}

/// Render the justification for a pick.
pub fn explain(hospital: &Hospital, urgency: Urgency) -> String {
    let mut reasons = vec![
        format!("{} is recommended because:", hospital.name),
        format!("- Urgency level: {}.", urgency),
        format!(
            "- Available beds: {}; wait time: {} minutes.",
            hospital.available_beds,
            hospital.wait_minutes()
        ),
        format!("- Location: {}, {}.", hospital.city, hospital.state),
    ];

    if !hospital.specialties.is_empty() {
        reasons.push(format!("- Specialties: {}.", hospital.specialties.join(", ")));
    }

    if hospital.emergency_services && urgency.needs_prompt_care() {
        reasons.push("- Has emergency services.".to_string());
    }

    reasons.join(" ")
}
