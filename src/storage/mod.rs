//! Storage backend protocol
//!
//! Thin consumer of two S3 operations: listing keys under a prefix and
//! producing a time-limited presigned read URL for one key.

pub mod client;
pub mod mock;

pub use client::S3StorageClient;
pub use mock::MockStorageClient;

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// List all object keys beginning with `prefix`, in backend order.
    ///
    /// Consumes a single ListObjectsV2 page; a truncated listing is accepted
    /// silently, so very large buckets may return a partial set.
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>>;

    /// Produce a signed URL granting read access to `key` for `expires_in`.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> Result<String>;
}
