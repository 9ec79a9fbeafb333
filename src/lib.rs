//! dumpgate: HTTP-triggered database backup service
//!
//! When the trigger endpoint is invoked (typically by an external scheduler),
//! the service iterates the configured database targets, dumps each one via
//! its external CLI tool, uploads the archive to object storage, and responds
//! with per-target results. An optional webhook receives the full run report.

pub mod config;
pub mod domain;
pub mod dump;
pub mod handlers;
pub mod middleware;
pub mod notify;
pub mod server;
pub mod state;
pub mod storage;
pub mod types;

pub use config::AppConfig;
pub use domain::BackupService;
pub use state::AppState;
pub use types::{BackupTarget, RunReport, TargetReport, TargetStatus};
