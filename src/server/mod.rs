//! Server lifecycle management
//!
//! This module provides a clean API for starting and stopping the HTTP
//! listener.
//!
//! # Example
//!
//! ```no_run
//! use dumpgate::config::AppConfig;
//! use dumpgate::server::{self, ServerConfig};
//! use dumpgate::state::AppState;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app_config = AppConfig::load()?;
//! let state = AppState::from_config(&app_config)?;
//! let handle = server::start(ServerConfig { app_config, state }).await?;
//! handle.run().await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};

mod lifecycle;
mod router;

pub use lifecycle::ServerHandle;
pub use router::build_router;

use crate::{config::AppConfig, state::AppState};

/// Server configuration bundle
pub struct ServerConfig {
    /// Application configuration (network settings, paths, etc.)
    pub app_config: AppConfig,
    /// Application state (services)
    pub state: AppState,
}

/// Start the HTTP listener
///
/// This binds the configured address, spawns the listener in the background
/// with graceful shutdown on ctrl-c, and returns a handle the caller runs
/// to completion.
pub async fn start(config: ServerConfig) -> Result<ServerHandle> {
    let router = router::build_router(&config.state);

    let addr = format!(
        "{}:{}",
        config.app_config.network.bind_addr, config.app_config.network.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "HTTP listener bound");

    let listener_task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(lifecycle::shutdown_signal())
            .await
    });

    Ok(ServerHandle::new(listener_task))
}
