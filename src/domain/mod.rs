//! Domain services
//!
//! Services encapsulate the business logic behind the HTTP handlers,
//! isolating them from direct infrastructure access.

mod backup_service;
mod health_service;

pub use backup_service::{BackupService, SweepInProgress, SweepSettings};
pub use health_service::{HealthService, ReadySummary};
