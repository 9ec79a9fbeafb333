//! Archive upload to object storage
//!
//! The sweep loop talks to [`ArchiveStore`]; the production implementation
//! streams archives into a cloud bucket, tests plug a local filesystem
//! backend through the same trait.

mod object;

use async_trait::async_trait;
use std::path::Path;

pub use object::ObjectArchiveStore;

/// Errors from uploading an archive
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid object key: {0}")]
    InvalidKey(#[from] object_store::path::Error),

    #[error("failed to read archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("object storage error: {0}")]
    Backend(#[from] object_store::Error),
}

/// Trait for archive storage implementations
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Upload the file at `local_path` under `key`, returning the final
    /// storage URL of the object
    async fn put_archive(&self, key: &str, local_path: &Path) -> Result<String, StoreError>;
}
