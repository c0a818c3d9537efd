//! Transfer service binary: configuration, collaborator wiring, serve.

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

use dashbuilder_transfer::config::TransferConfig;
use dashbuilder_transfer::logging;
use dashbuilder_transfer::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    // Optional positional argument: path to the configuration file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = TransferConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?;

    let state = AppState::from_config(&config)
        .await
        .context("Failed to wire transfer collaborators")?;
    let app = web::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.web.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.web.bind_address))?;

    info!(
        bind_address = %config.web.bind_address,
        version = dashbuilder_transfer::VERSION,
        "Transfer service listening"
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
