//! Listing and URL resolution for gallery images
//!
//! The two-step core: list the bucket and keep keys with an allow-listed
//! image extension, then resolve each key to a viewable URL. With a CDN base
//! configured the resolution is pure string concatenation; otherwise each key
//! gets a time-limited presigned URL from the storage backend.

use crate::models::GalleryImage;
use crate::storage::StorageService;
use crate::Result;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

/// Extension after the last `.`, lowercased. `None` when the key has no dot.
pub fn extension_of(key: &str) -> Option<String> {
    key.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Case-insensitive membership test against the configured extension set.
pub fn is_allowed_image(key: &str, allowed: &HashSet<String>) -> bool {
    extension_of(key).is_some_and(|ext| allowed.contains(&ext))
}

/// `base` with trailing slashes stripped, joined to `key` with leading
/// slashes stripped. Pure and deterministic.
pub fn join_cdn_url(base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

/// Lists and resolves the images for one page render.
pub struct Gallery {
    storage: Arc<dyn StorageService>,
    prefix: String,
    allowed_extensions: HashSet<String>,
    cdn_base: Option<String>,
    signed_url_expiry: Duration,
}

impl Gallery {
    pub fn new(
        storage: Arc<dyn StorageService>,
        prefix: String,
        allowed_extensions: HashSet<String>,
        cdn_base: Option<String>,
        signed_url_expiry: Duration,
    ) -> Self {
        Self {
            storage,
            prefix,
            allowed_extensions,
            cdn_base,
            signed_url_expiry,
        }
    }

    /// List the bucket under the configured prefix and keep image keys.
    ///
    /// Backend ordering is preserved; nothing is sorted or deduplicated.
    pub async fn list_images(&self) -> Result<Vec<String>> {
        let keys = self.storage.list_objects(&self.prefix).await?;

        Ok(keys
            .into_iter()
            .filter(|key| is_allowed_image(key, &self.allowed_extensions))
            .collect())
    }

    /// Resolve one key to a viewable URL.
    ///
    /// Never touches the backend when a CDN base is configured.
    pub async fn resolve_url(&self, key: &str) -> Result<String> {
        match &self.cdn_base {
            Some(base) => Ok(join_cdn_url(base, key)),
            None => {
                self.storage
                    .presigned_get_url(key, self.signed_url_expiry)
                    .await
            }
        }
    }

    /// List, filter and resolve, degrading failures instead of propagating.
    ///
    /// A listing failure yields an empty gallery; a signing failure drops
    /// that key and leaves the rest intact. Worst case is an empty page,
    /// never an aborted render.
    pub async fn collect(&self) -> Vec<GalleryImage> {
        let keys = match self.list_images().await {
            Ok(keys) => keys,
            Err(e) => {
                error!("Listing failed, rendering empty gallery: {}", e);
                return Vec::new();
            }
        };

        let mut images = Vec::with_capacity(keys.len());
        for key in keys {
            match self.resolve_url(&key).await {
                Ok(url) => images.push(GalleryImage { key, url }),
                Err(e) => warn!("Skipping {}: {}", key, e),
            }
        }
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorageClient;

    fn allowed() -> HashSet<String> {
        ["jpg", "jpeg", "png", "gif", "bmp", "webp"]
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    fn gallery(storage: MockStorageClient, prefix: &str, cdn: Option<&str>) -> Gallery {
        Gallery::new(
            Arc::new(storage),
            prefix.to_string(),
            allowed(),
            cdn.map(str::to_string),
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photos/a.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("a.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("no-extension"), None);
    }

    #[test]
    fn test_is_allowed_image_case_insensitive() {
        let exts = allowed();
        assert!(is_allowed_image("a.JPG", &exts));
        assert!(is_allowed_image("b.webp", &exts));
        assert!(!is_allowed_image("c.txt", &exts));
        assert!(!is_allowed_image("no-extension", &exts));
    }

    #[test]
    fn test_join_cdn_url_strips_slashes() {
        assert_eq!(
            join_cdn_url("https://cdn.x.com/", "a.jpg"),
            "https://cdn.x.com/a.jpg"
        );
        assert_eq!(
            join_cdn_url("https://cdn.x.com", "/a.jpg"),
            "https://cdn.x.com/a.jpg"
        );
        assert_eq!(
            join_cdn_url("https://cdn.x.com//", "//dir/a.jpg"),
            "https://cdn.x.com/dir/a.jpg"
        );
    }

    #[tokio::test]
    async fn test_list_images_filters_and_preserves_order() {
        let storage = MockStorageClient::new().with_keys(&[
            "photos/z.png",
            "photos/a.JPG",
            "photos/b.txt",
            "docs/c.png",
        ]);
        let gallery = gallery(storage, "photos/", None);

        let keys = gallery.list_images().await.unwrap();
        assert_eq!(keys, vec!["photos/z.png", "photos/a.JPG"]);
    }

    #[tokio::test]
    async fn test_resolve_url_prefers_cdn_and_skips_backend() {
        let storage = MockStorageClient::new();
        let counter = storage.clone();
        let gallery = gallery(storage, "", Some("https://cdn.x.com/"));

        let url = gallery.resolve_url("a.jpg").await.unwrap();
        assert_eq!(url, "https://cdn.x.com/a.jpg");
        assert_eq!(counter.get_presign_count(), 0);

        // Pure function: identical inputs, identical output.
        assert_eq!(gallery.resolve_url("a.jpg").await.unwrap(), url);
    }

    #[tokio::test]
    async fn test_resolve_url_signs_without_cdn() {
        let storage = MockStorageClient::new();
        let counter = storage.clone();
        let gallery = gallery(storage, "", None);

        let url = gallery.resolve_url("a.jpg").await.unwrap();
        assert!(url.contains("a.jpg"));
        assert!(url.contains("X-Amz-Expires=3600"));
        assert_eq!(counter.get_presign_count(), 1);
    }

    #[tokio::test]
    async fn test_collect_drops_failed_keys() {
        let storage = MockStorageClient::new()
            .with_keys(&["a.jpg", "b.jpg", "c.jpg"])
            .failing_key("b.jpg");
        let gallery = gallery(storage, "", None);

        let images = gallery.collect().await;
        let keys: Vec<&str> = images.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["a.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn test_collect_empty_on_listing_failure() {
        let storage = MockStorageClient::new()
            .with_keys(&["a.jpg"])
            .failing_listing();
        let gallery = gallery(storage, "", None);

        assert!(gallery.collect().await.is_empty());
    }
}
