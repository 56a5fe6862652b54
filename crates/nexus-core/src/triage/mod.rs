//! Rule-based triage pipeline.
//!
//! Pipeline: Message → Classification → Shortlist → Recommendation

mod classifier;
mod finder;
mod recommender;

pub use classifier::*;
pub use finder::*;
pub use recommender::*;

use serde::Serialize;
use thiserror::Error;

use crate::models::{TriageState, Urgency};
use crate::store::Dataset;

/// Triage errors.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Failed to render recommendation: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Pipeline stage did not run: {0}")]
    Incomplete(&'static str),
}

pub type TriageResult<T> = Result<T, TriageError>;

/// Reasoning returned when the pipeline fails.
pub const UNAVAILABLE_REASONING: &str = "Agent system unavailable";

/// Urgency label returned when the pipeline fails.
pub const UNKNOWN_URGENCY: &str = "unknown";

/// Main pipeline that runs the three stages in order.
pub struct TriagePipeline<'a> {
    dataset: &'a Dataset,
    classifier: Classifier,
    recommender: Recommender,
}

impl<'a> TriagePipeline<'a> {
    /// Create a pipeline over a dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            classifier: Classifier::new(),
            recommender: Recommender::new(),
        }
    }

    /// Use a custom classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Run every stage for a message.
    pub fn run(&self, message: &str) -> TriageState<'a> {
        let mut state = TriageState::new(message);

        // Step 1: Classify the message
        let classification = self.classifier.classify(&state.message);
        state.classification = Some(classification);

        // Step 2: Shortlist hospitals for the classification
        state.shortlist = Finder::new(self.dataset.hospitals()).find(classification);

        // Step 3: Pick one and explain it
        state.recommendation = Some(
            self.recommender
                .recommend(&state.shortlist, classification.urgency),
        );

        state
    }

    /// Run the pipeline and render the response body.
    pub fn respond(&self, message: &str) -> TriageResult<TriageReport> {
        TriageReport::from_state(&self.run(message))
    }

    /// Get the classifier for direct access.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

/// Rendered pipeline result as returned to API clients.
///
/// `hospital` is the full record, or an empty object when there was no pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageReport {
    pub hospital: serde_json::Value,
    pub reasoning: String,
    pub urgency: Urgency,
}

impl TriageReport {
    /// Render a completed pipeline state.
    pub fn from_state(state: &TriageState<'_>) -> TriageResult<Self> {
        let urgency = state
            .urgency()
            .ok_or(TriageError::Incomplete("classifier"))?;
        let recommendation = state
            .recommendation
            .as_ref()
            .ok_or(TriageError::Incomplete("recommender"))?;

        let hospital = match recommendation.hospital {
            Some(hospital) => serde_json::to_value(hospital)?,
            None => empty_object(),
        };

        Ok(Self {
            hospital,
            reasoning: recommendation.reasoning.clone(),
            urgency,
        })
    }
}

/// Response body used in place of a report when the pipeline fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageFallback {
    pub error: String,
    pub hospital: serde_json::Value,
    pub reasoning: String,
    pub urgency: String,
}

impl From<TriageError> for TriageFallback {
    fn from(e: TriageError) -> Self {
        Self {
            error: e.to_string(),
            hospital: empty_object(),
            reasoning: UNAVAILABLE_REASONING.to_string(),
            urgency: UNKNOWN_URGENCY.to_string(),
        }
    }
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
