use anyhow::Result;
use bucket_gallery::models::Config;
use bucket_gallery::server;
use bucket_gallery::storage::{S3StorageClient, StorageService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bucket_gallery=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bucket-gallery");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.cdn_base.is_some() {
        info!("CDN base configured, URLs will not be signed");
    } else {
        info!(
            "No CDN base, presigning URLs with {}s expiry",
            config.signed_url_expiry.as_secs()
        );
    }

    let storage: Arc<dyn StorageService> = match S3StorageClient::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        config.endpoint.clone(),
        config.region.clone(),
        config.bucket.clone(),
    )
    .await
    {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize storage client: {}", e);
            std::process::exit(1);
        }
    };

    match server::serve(config, storage).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Server error: {}", e);
            std::process::exit(1);
        }
    }
}
