use anyhow::Context;

use dumpgate::config::AppConfig;
use dumpgate::server::{self, ServerConfig};
use dumpgate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logs
    tracing_subscriber::fmt::init();

    // Load centralized configuration: optional TOML file, env always wins
    let config = match std::env::var("DUMPGATE_CONFIG") {
        Ok(path) => AppConfig::load_layered(Some(std::path::Path::new(&path)))
            .with_context(|| format!("failed to load configuration from {}", path))?,
        Err(_) => AppConfig::load().context("failed to load configuration")?,
    };

    tracing::info!(
        bucket = %config.storage.bucket,
        targets = config.targets.targets.len(),
        webhook = config.webhook.url.is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).context("failed to build application state")?;

    let handle = server::start(ServerConfig {
        app_config: config,
        state,
    })
    .await
    .context("failed to start server")?;

    // Run server (blocks until shutdown or error)
    handle.run().await
}
