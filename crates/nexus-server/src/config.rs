//! Server configuration from command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Worker count must be at least 1")]
    InvalidWorkers,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "NEXUS hospital recommendation API", long_about = None)]
pub struct Args {
    #[arg(
        long,
        default_value = "0.0.0.0",
        help = "Host address to bind the server to"
    )]
    pub host: String,

    #[arg(long, default_value_t = 8000, help = "Port number to listen on")]
    pub port: u16,

    #[arg(
        long,
        default_value = "hospitals_data.json",
        help = "Path to the hospital dataset (JSON array). Relative paths missing from the working directory are also looked up next to the executable"
    )]
    pub data_path: PathBuf,

    #[arg(
        long,
        default_value = "info",
        help = "Log level: off, error, warn, info, debug or trace. RUST_LOG overrides it"
    )]
    pub log_level: String,

    #[arg(long, help = "Number of HTTP worker threads (defaults to the CPU count)")]
    pub workers: Option<usize>,
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub log_level: LevelFilter,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_path: PathBuf::from("hospitals_data.json"),
            log_level: LevelFilter::Info,
            workers: None,
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let log_level = LevelFilter::from_str(&args.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(args.log_level.clone()))?;

        if args.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers);
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            data_path: args.data_path,
            log_level,
            workers: args.workers,
        })
    }
}
