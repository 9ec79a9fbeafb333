//! Server lifecycle coordination
//!
//! Manages the spawned HTTP listener task and graceful shutdown.

use anyhow::Result;
use tokio::task::JoinHandle;

/// Handle to the running server
///
/// The listener runs in a background task; `run` joins it and surfaces
/// listener errors to the caller.
pub struct ServerHandle {
    listener_task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub(crate) fn new(listener_task: JoinHandle<std::io::Result<()>>) -> Self {
        Self { listener_task }
    }

    /// Run until the listener exits (shutdown signal or error)
    pub async fn run(self) -> Result<()> {
        self.listener_task.await??;
        tracing::info!("HTTP listener exited");
        Ok(())
    }
}

/// Resolve when a shutdown signal arrives
pub(crate) async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
