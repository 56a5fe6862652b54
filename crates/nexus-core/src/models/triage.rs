//! Triage pipeline models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Hospital;

/// How quickly the user needs care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    Urgent,
    Routine,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::Urgent => "urgent",
            Urgency::Routine => "routine",
        }
    }

    /// Critical and urgent messages both call for emergency-capable care.
    pub fn needs_prompt_care(&self) -> bool {
        matches!(self, Urgency::Critical | Urgency::Urgent)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symptom family used to pick specialty-specific filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomCategory {
    #[serde(rename = "emergency/cardiac")]
    EmergencyCardiac,
    #[serde(rename = "pediatric")]
    Pediatric,
    #[serde(rename = "maternity")]
    Maternity,
    #[serde(rename = "urgent_general")]
    UrgentGeneral,
    #[serde(rename = "general")]
    General,
}

impl SymptomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::EmergencyCardiac => "emergency/cardiac",
            SymptomCategory::Pediatric => "pediatric",
            SymptomCategory::Maternity => "maternity",
            SymptomCategory::UrgentGeneral => "urgent_general",
            SymptomCategory::General => "general",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: SymptomCategory,
    pub urgency: Urgency,
}

impl Classification {
    pub fn new(category: SymptomCategory, urgency: Urgency) -> Self {
        Self { category, urgency }
    }
}

/// Output of the recommender stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    /// Best hospital, if the shortlist was non-empty
    pub hospital: Option<&'a Hospital>,
    /// Human-readable justification
    pub reasoning: String,
}

/// Per-request pipeline state.
///
/// Each stage fills in its own fields; the state borrows from the dataset
/// and is dropped once the response has been rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageState<'a> {
    /// Message as the user sent it
    pub message: String,
    pub classification: Option<Classification>,
    /// Ordered finder output (at most 10 entries)
    pub shortlist: Vec<&'a Hospital>,
    pub recommendation: Option<Recommendation<'a>>,
}

impl<'a> TriageState<'a> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            classification: None,
            shortlist: Vec::new(),
            recommendation: None,
        }
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.classification.map(|c| c.urgency)
    }

    pub fn category(&self) -> Option<SymptomCategory> {
        self.classification.map(|c| c.category)
    }

    /// Final pick, once the recommender has run.
    pub fn best(&self) -> Option<&'a Hospital> {
        self.recommendation.as_ref().and_then(|r| r.hospital)
    }

    pub fn reasoning(&self) -> Option<&str> {
        self.recommendation.as_ref().map(|r| r.reasoning.as_str())
    }
}
