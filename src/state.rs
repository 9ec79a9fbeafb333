//! Application state
//!
//! Bundles the domain services the router hands to handlers.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::{AppConfig, AuthConfig};
use crate::domain::{BackupService, HealthService, SweepSettings};
use crate::dump::CommandDumper;
use crate::notify::{NoopNotifier, Notifier, WebhookNotifier};
use crate::storage::ObjectArchiveStore;

/// Application state (services and auth configuration)
#[derive(Clone)]
pub struct AppState {
    backup: Arc<BackupService>,
    health: Arc<HealthService>,
    auth: Arc<AuthConfig>,
}

impl AppState {
    /// Assemble state from explicit services (used by tests)
    pub fn new(
        backup: Arc<BackupService>,
        health: Arc<HealthService>,
        auth: Arc<AuthConfig>,
    ) -> Self {
        Self {
            backup,
            health,
            auth,
        }
    }

    /// Build production state from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let store = ObjectArchiveStore::gcs(&config.storage.bucket)
            .with_context(|| format!("failed to open bucket '{}'", config.storage.bucket))?;

        let notifier: Arc<dyn Notifier> = match &config.webhook.url {
            Some(url) => Arc::new(
                WebhookNotifier::new(url.clone(), config.operational.webhook_timeout())
                    .context("failed to build webhook notifier")?,
            ),
            None => Arc::new(NoopNotifier),
        };

        let backup = BackupService::new(
            config.targets.targets.clone(),
            Arc::new(CommandDumper::new()),
            Arc::new(store),
            notifier,
            SweepSettings::from_config(&config.storage, &config.operational),
        );

        Ok(Self {
            backup: Arc::new(backup),
            health: Arc::new(HealthService::new(&config.targets)),
            auth: Arc::new(config.auth.clone()),
        })
    }

    pub fn backup(&self) -> Arc<BackupService> {
        self.backup.clone()
    }

    pub fn health(&self) -> Arc<HealthService> {
        self.health.clone()
    }

    pub fn auth_config(&self) -> Arc<AuthConfig> {
        self.auth.clone()
    }
}
