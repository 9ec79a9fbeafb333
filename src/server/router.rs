//! Axum router configuration
//!
//! Modular router organization with focused sub-routers for different API surfaces.
//!
//! ```text
//! /
//! ├── /               - Sweep trigger (scheduler-facing, bare result array)
//! ├── /api/backup/*   - Backup REST API (full reports, target listing)
//! └── /health/*       - Health check endpoints
//! ```
//!
//! The API key middleware (when a key is configured) guards the trigger and
//! API routes; health routes stay open for probes and load balancers.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::domain::{BackupService, HealthService};
use crate::handlers::backup::{list_targets, run_sweep, trigger_sweep};
use crate::handlers::health::{live, ready};
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes
pub fn build_router(state: &AppState) -> Router {
    let auth_config = state.auth_config();
    let backup_service = state.backup();
    let health_service = state.health();

    Router::new()
        .merge(trigger_router(backup_service.clone(), auth_config.clone()))
        .nest("/api/backup", backup_api_router(backup_service, auth_config))
        .nest("/health", health_router(health_service))
}

/// Scheduler-facing trigger route
///
/// Routes:
/// - `GET /` - Run a sweep, respond with the per-target result array
fn trigger_router(service: Arc<BackupService>, auth_config: Arc<AuthConfig>) -> Router {
    Router::new()
        .route("/", get(trigger_sweep).with_state(service))
        .layer(axum::middleware::from_fn_with_state(
            auth_config,
            middleware::api_key_auth,
        ))
}

/// Backup REST API routes
///
/// Routes:
/// - `POST /api/backup/run` - Run a sweep, respond with the full run report
/// - `GET  /api/backup/targets` - List configured targets (names only)
fn backup_api_router(service: Arc<BackupService>, auth_config: Arc<AuthConfig>) -> Router {
    Router::new()
        .route("/run", post(run_sweep).with_state(service.clone()))
        .route("/targets", get(list_targets).with_state(service))
        .layer(axum::middleware::from_fn_with_state(
            auth_config,
            middleware::api_key_auth,
        ))
}

/// Health check routes
///
/// Endpoints for monitoring service health and readiness.
///
/// Routes:
/// - `GET /health/live`  - Liveness probe (process is alive)
/// - `GET /health/ready` - Readiness probe (configuration loaded)
fn health_router(health_service: Arc<HealthService>) -> Router {
    Router::new()
        .route("/live", get(live))
        .route("/ready", get(ready).with_state(health_service))
}
