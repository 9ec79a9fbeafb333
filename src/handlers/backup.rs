//! Backup trigger handlers
//!
//! The root route serves the external scheduler and answers with the bare
//! result array; the API route returns the full run report.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::BackupService;
use crate::types::DumpTool;

/// Trigger a sweep, returning only the per-target result array
///
/// GET /
///
/// This is the route the scheduler invokes; the response shape is the
/// plain array of `{name, status, ...}` entries.
pub async fn trigger_sweep(State(service): State<Arc<BackupService>>) -> Response {
    match service.try_run().await {
        Ok(report) => Json(report.results).into_response(),
        Err(busy) => sweep_busy_response(busy),
    }
}

/// Trigger a sweep, returning the full run report
///
/// POST /api/backup/run
pub async fn run_sweep(State(service): State<Arc<BackupService>>) -> Response {
    match service.try_run().await {
        Ok(report) => Json(report).into_response(),
        Err(busy) => sweep_busy_response(busy),
    }
}

/// Summary of a configured target (no URIs: they carry credentials)
#[derive(Debug, Serialize)]
pub struct TargetSummary {
    pub name: String,
    pub tool: DumpTool,
    pub runnable: bool,
}

/// List configured targets
///
/// GET /api/backup/targets
pub async fn list_targets(State(service): State<Arc<BackupService>>) -> Json<Vec<TargetSummary>> {
    let targets = service
        .targets()
        .iter()
        .map(|t| TargetSummary {
            name: t.display_name().to_string(),
            tool: t.tool,
            runnable: t.is_runnable(),
        })
        .collect();
    Json(targets)
}

fn sweep_busy_response(busy: crate::domain::SweepInProgress) -> Response {
    (
        StatusCode::CONFLICT,
        Json(serde_json::json!({ "error": busy.to_string() })),
    )
        .into_response()
}
