//! Domain models for the NEXUS hospital service.

mod hospital;
mod triage;

pub use hospital::*;
pub use triage::*;
