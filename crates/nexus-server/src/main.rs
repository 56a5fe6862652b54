//! `nexus-server` binary: parse flags, load the dataset and serve the API.

use clap::Parser;
use nexus_server::logging::init_logging;
use nexus_server::{startup, AppState, Args, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::try_from(Args::parse())?;
    init_logging(config.log_level);

    let app_state = AppState::from_config(&config)?;
    startup(config, app_state).await?;
    Ok(())
}
