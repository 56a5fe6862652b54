//! Message classifier.
//!
//! Keyword tiers are checked in order and the first tier with a substring
//! hit decides the result:
//! - critical keywords → critical, emergency/cardiac
//! - urgent keywords → urgent; pediatric before maternity, else urgent_general
//! - anything else → routine, general

use crate::models::{Classification, SymptomCategory, Urgency};

const CRITICAL_KEYWORDS: &[&str] = &[
    "chest pain",
    "chest",
    "heart",
    "cardiac",
    "stroke",
    "can't breathe",
    "unconscious",
    "severe bleeding",
    "heart attack",
];

const URGENT_KEYWORDS: &[&str] = &[
    "child",
    "kid",
    "baby",
    "pediatric",
    "pregnancy",
    "labor",
    "delivery",
    "injury",
    "broken",
    "fracture",
    "high fever",
];

const PEDIATRIC_KEYWORDS: &[&str] = &["child", "kid", "baby", "pediatric"];

const MATERNITY_KEYWORDS: &[&str] = &["pregnancy", "labor", "delivery"];

/// Keyword classifier for free-text symptom messages.
pub struct Classifier {
    critical: Vec<String>,
    urgent: Vec<String>,
    pediatric: Vec<String>,
    maternity: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with the default keyword tiers.
    pub fn new() -> Self {
        Self {
            critical: owned_keywords(CRITICAL_KEYWORDS),
            urgent: owned_keywords(URGENT_KEYWORDS),
            pediatric: owned_keywords(PEDIATRIC_KEYWORDS),
            maternity: owned_keywords(MATERNITY_KEYWORDS),
        }
    }

    /// Classify a raw message into a symptom category and urgency tier.
    pub fn classify(&self, message: &str) -> Classification {
        let message = message.trim().to_lowercase();

        if contains_any(&message, &self.critical) {
            return Classification::new(SymptomCategory::EmergencyCardiac, Urgency::Critical);
        }

        if contains_any(&message, &self.urgent) {
            let category = if contains_any(&message, &self.pediatric) {
                SymptomCategory::Pediatric
            } else if contains_any(&message, &self.maternity) {
                SymptomCategory::Maternity
            } else {
                SymptomCategory::UrgentGeneral
            };
            return Classification::new(category, Urgency::Urgent);
        }

        Classification::new(SymptomCategory::General, Urgency::Routine)
    }

    /// Add a keyword to the critical tier.
    pub fn add_critical_keyword(&mut self, keyword: &str) {
        self.critical.push(keyword.to_lowercase());
    }

    /// Add a keyword to the urgent tier, landing in urgent_general.
    pub fn add_urgent_keyword(&mut self, keyword: &str) {
        self.urgent.push(keyword.to_lowercase());
    }
}

/// Classify with the default keyword tiers.
pub fn classify(message: &str) -> Classification {
    Classifier::new().classify(message)
}

fn contains_any(message: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| message.contains(k.as_str()))
}

fn owned_keywords(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_string()).collect()
}
