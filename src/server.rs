//! HTTP serving
//!
//! One route: `GET /` renders the gallery page. Requests share only
//! immutable state; every request re-lists the bucket and re-resolves URLs.

use crate::gallery::Gallery;
use crate::models::Config;
use crate::render::render_page;
use crate::storage::StorageService;
use crate::Result;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub gallery: Arc<Gallery>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn StorageService>) -> Self {
        let gallery = Gallery::new(
            storage,
            config.prefix.clone(),
            config.allowed_extensions.clone(),
            config.cdn_base.clone(),
            config.signed_url_expiry,
        );
        Self {
            gallery: Arc::new(gallery),
            config: Arc::new(config),
        }
    }
}

/// Render the gallery page. Always succeeds; storage failures degrade to an
/// empty gallery inside [`Gallery::collect`].
async fn index(State(state): State<AppState>) -> Html<String> {
    let images = state.gallery.collect().await;
    info!("Rendering gallery with {} images", images.len());
    Html(render_page(&state.config, &images))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config, storage: Arc<dyn StorageService>) -> Result<()> {
    let bind_addr = config.bind_addr.clone();
    let app = router(AppState::new(config, storage));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorageClient;
    use std::collections::HashSet;
    use std::time::Duration;

    fn test_config(cdn_base: Option<&str>) -> Config {
        use crate::models::SocialLinks;
        Config {
            region: "us-east-1".to_string(),
            endpoint: "https://s3.example.com".to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            bucket: "gallery".to_string(),
            prefix: String::new(),
            cdn_base: cdn_base.map(str::to_string),
            allowed_extensions: ["jpg", "png"].iter().map(|e| e.to_string()).collect::<HashSet<_>>(),
            signed_url_expiry: Duration::from_secs(3600),
            bind_addr: "127.0.0.1:0".to_string(),
            title: "Test".to_string(),
            section_description: "Test".to_string(),
            footer_title: "Footer".to_string(),
            footer_text: "Text".to_string(),
            social: SocialLinks {
                telegram: "#".to_string(),
                twitter: "#".to_string(),
                facebook: "#".to_string(),
                instagram: "#".to_string(),
                github: "#".to_string(),
                dribbble: "#".to_string(),
                linkedin: "#".to_string(),
                mastodon: "#".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_index_renders_resolved_images() {
        let storage = MockStorageClient::new().with_keys(&["a.jpg", "notes.txt"]);
        let state = AppState::new(test_config(Some("https://cdn.x.com")), Arc::new(storage));

        let Html(html) = index(State(state)).await;
        assert!(html.contains("https://cdn.x.com/a.jpg"));
        assert!(!html.contains("notes.txt"));
    }

    #[tokio::test]
    async fn test_index_survives_listing_failure() {
        let storage = MockStorageClient::new().failing_listing();
        let state = AppState::new(test_config(None), Arc::new(storage));

        let Html(html) = index(State(state)).await;
        assert!(html.contains("<footer id=\"footer\""));
        assert!(!html.contains("article class=\"thumb\""));
    }
}
