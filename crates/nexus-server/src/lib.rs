//! HTTP surface for the NEXUS hospital service.
//!
//! Handlers read from a shared [`nexus_core::Dataset`] or run the triage
//! pipeline for `/api/chat`.

pub mod config;
pub mod io_struct;
pub mod logging;
pub mod server;

pub use config::{Args, ConfigError, ServerConfig};
pub use server::{configure, cors, startup, AppState};
