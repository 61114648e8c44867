use super::StorageService;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{config::Region, Client as S3Client};
use std::time::Duration;

pub struct S3StorageClient {
    client: S3Client,
    bucket: String,
}

impl S3StorageClient {
    pub async fn new(
        access_key: String,
        secret_key: String,
        endpoint: String,
        region: String,
        bucket: String,
    ) -> Result<Self> {
        let credentials =
            aws_sdk_s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        // Custom endpoint config for S3-compatible providers
        let config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .load()
            .await;

        let client = S3Client::new(&config);

        Ok(Self { client, bucket })
    }
}

#[async_trait]
impl StorageService for S3StorageClient {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| Error::Listing(format!("Failed to list bucket contents: {}", e)))?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();

        Ok(keys)
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> Result<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| Error::Signing(format!("Invalid expiry: {}", e)))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| Error::Signing(format!("Failed to presign {}: {}", key, e)))?;

        Ok(request.uri().to_string())
    }
}
