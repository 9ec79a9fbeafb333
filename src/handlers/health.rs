//! Health check handlers

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::domain::HealthService;

/// Liveness probe (process is alive)
///
/// GET /health/live
pub async fn live() -> impl IntoResponse {
    "OK"
}

/// Readiness probe (configuration loaded, targets known)
///
/// GET /health/ready
pub async fn ready(State(health): State<Arc<HealthService>>) -> impl IntoResponse {
    Json(health.ready())
}
