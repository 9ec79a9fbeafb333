//! `object_store`-backed archive store

use async_trait::async_trait;
use object_store::ObjectStore;
use object_store::buffered::BufWriter;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as ObjectPath;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

use super::{ArchiveStore, StoreError};

/// Archive store writing to any `object_store` backend
///
/// Uploads stream through a buffered multipart writer, so archive size is
/// bounded by the bucket, not by memory.
pub struct ObjectArchiveStore {
    store: Arc<dyn ObjectStore>,
    /// URL base reported in results, e.g. `gs://<bucket>`
    url_base: String,
}

impl ObjectArchiveStore {
    /// Store backed by a Google Cloud Storage bucket
    ///
    /// Credentials come from the ambient environment (service account file
    /// or instance metadata).
    pub fn gcs(bucket: &str) -> Result<Self, StoreError> {
        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()?;
        Ok(Self {
            store: Arc::new(store),
            url_base: format!("gs://{}", bucket),
        })
    }

    /// Store backed by an arbitrary `object_store` implementation
    ///
    /// `url_base` is prepended to keys when reporting locations.
    pub fn with_store(store: Arc<dyn ObjectStore>, url_base: impl Into<String>) -> Self {
        Self {
            store,
            url_base: url_base.into(),
        }
    }
}

#[async_trait]
impl ArchiveStore for ObjectArchiveStore {
    async fn put_archive(&self, key: &str, local_path: &Path) -> Result<String, StoreError> {
        let object_path = ObjectPath::parse(key)?;

        let file = tokio::fs::File::open(local_path).await?;
        let mut reader = tokio::io::BufReader::new(file);
        let mut writer = BufWriter::new(Arc::clone(&self.store), object_path);

        let bytes = tokio::io::copy(&mut reader, &mut writer).await?;
        writer.shutdown().await?;

        tracing::debug!(key, bytes, "Archive uploaded");
        Ok(format!("{}/{}", self.url_base, key))
    }
}
