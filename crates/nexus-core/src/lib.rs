//! NEXUS Core Library
//!
//! Hospital dataset store and rule-based triage for the NEXUS hospital API.
//!
//! # Architecture
//!
//! ```text
//! hospitals_data.json ──load once──▶ Dataset (read-only snapshot)
//!                                        │
//!            ┌───────────────────────────┼────────────────────────────┐
//!            │                           │                            │
//!            ▼                           ▼                            ▼
//!   lookup / nearby / filter          Stats                    Triage pipeline
//!                                                                     │
//!                       message ─▶ Classifier ─▶ Finder ─▶ Recommender
//!                                 (urgency,     (≤10       (best pick +
//!                                  category)    shortlist)  reasoning)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Hospital, Classification, TriageState, etc.)
//! - [`store`]: Dataset loading and direct queries
//! - [`report`]: Dataset statistics
//! - [`triage`]: Classifier, finder and recommender stages

pub mod models;
pub mod report;
pub mod store;
pub mod triage;

// Re-export commonly used types
pub use models::{
    BedType, Classification, Hospital, NearbyHospital, Recommendation, SymptomCategory,
    TriageState, Urgency,
};
pub use report::DatasetStats;
pub use store::{Dataset, HospitalFilter, StoreError};
pub use triage::{
    Classifier, Finder, Recommender, TriageError, TriageFallback, TriagePipeline, TriageReport,
};

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum NexusError {
    #[error("Dataset error: {0}")]
    Store(#[from] StoreError),

    #[error("Triage error: {0}")]
    Triage(#[from] TriageError),
}

pub type NexusResult<T> = Result<T, NexusError>;
