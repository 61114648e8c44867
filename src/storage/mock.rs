use super::StorageService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct MockStorageClient {
    keys: Arc<Mutex<Vec<String>>>,
    base_url: String,
    fail_listing: bool,
    failing_keys: Arc<Mutex<Vec<String>>>,
    list_count: Arc<Mutex<usize>>,
    presign_count: Arc<Mutex<usize>>,
}

impl MockStorageClient {
    pub fn new() -> Self {
        Self {
            keys: Arc::new(Mutex::new(Vec::new())),
            base_url: "https://mock-s3.example.com".to_string(),
            fail_listing: false,
            failing_keys: Arc::new(Mutex::new(Vec::new())),
            list_count: Arc::new(Mutex::new(0)),
            presign_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_keys(self, keys: &[&str]) -> Self {
        self.keys
            .lock()
            .unwrap()
            .extend(keys.iter().map(|k| k.to_string()));
        self
    }

    /// Every listing call will fail.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Presigning will fail for `key` only.
    pub fn failing_key(self, key: &str) -> Self {
        self.failing_keys.lock().unwrap().push(key.to_string());
        self
    }

    pub fn get_list_count(&self) -> usize {
        *self.list_count.lock().unwrap()
    }

    pub fn get_presign_count(&self) -> usize {
        *self.presign_count.lock().unwrap()
    }
}

impl Default for MockStorageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageService for MockStorageClient {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>> {
        let mut count = self.list_count.lock().unwrap();
        *count += 1;

        if self.fail_listing {
            return Err(Error::Listing("Mock listing failure".to_string()));
        }

        let keys = self.keys.lock().unwrap();
        Ok(keys
            .iter()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> Result<String> {
        let mut count = self.presign_count.lock().unwrap();
        *count += 1;

        if self.failing_keys.lock().unwrap().iter().any(|k| k == key) {
            return Err(Error::Signing(format!("Mock signing failure: {}", key)));
        }

        Ok(format!(
            "{}/{}?X-Amz-Expires={}",
            self.base_url,
            key,
            expires_in.as_secs()
        ))
    }
}
