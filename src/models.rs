//! Data models and configuration
//!
//! Defines the immutable process configuration and the resolved gallery
//! entries handed to the renderer.

use std::collections::HashSet;
use std::time::Duration;

/// One gallery entry: an object key and the URL it resolved to.
///
/// Only successfully resolved keys become entries; a key whose resolution
/// failed is dropped before rendering, never carried with an empty URL.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub key: String,
    pub url: String,
}

/// Social links rendered in the page footer.
#[derive(Debug, Clone)]
pub struct SocialLinks {
    pub telegram: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub github: String,
    pub dribbble: String,
    pub linkedin: String,
    pub mastodon: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub prefix: String,
    /// Public CDN base; when set, URLs are concatenated instead of signed.
    pub cdn_base: Option<String>,
    /// Lowercased extensions accepted as gallery images.
    pub allowed_extensions: HashSet<String>,
    pub signed_url_expiry: Duration,
    pub bind_addr: String,
    pub title: String,
    pub section_description: String,
    pub footer_title: String,
    pub footer_text: String,
    pub social: SocialLinks,
}

const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
const DEFAULT_EXPIRY_SECS: u64 = 3600;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// This is the only place the process reads ambient environment state;
    /// everything downstream takes the resulting struct.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let cdn_base = match env_or("CDN_DOMAIN", "") {
            s if s.is_empty() => None,
            s => Some(s),
        };

        let allowed_extensions = parse_extensions(&env_or(
            "IMAGE_EXTENSIONS",
            &DEFAULT_EXTENSIONS.join(","),
        ));

        let signed_url_expiry = Duration::from_secs(
            env_or("SIGNED_URL_EXPIRY_SECS", "")
                .parse()
                .unwrap_or(DEFAULT_EXPIRY_SECS),
        );

        Ok(Self {
            region: env_or("S3_REGION", "us-east-1"),
            endpoint: env_or("S3_ENDPOINT", "https://s3.bitiful.net"),
            access_key: env_or("S3_ACCESS_KEY", ""),
            secret_key: env_or("S3_SECRET_KEY", ""),
            bucket: env_or("S3_BUCKET_NAME", ""),
            prefix: env_or("S3_PREFIX", ""),
            cdn_base,
            allowed_extensions,
            signed_url_expiry,
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            title: env_or("TITLE", "Multiverse by HTML5 UP"),
            section_description: env_or("SECTION_DESCRIPTION", "Multiverse by HTML5 UP"),
            footer_title: env_or("FOOTER_TITLE", "Footer Title"),
            footer_text: env_or("FOOTER_TEXT", "Footer Text"),
            social: SocialLinks {
                telegram: env_or("TELEGRAM_URL", "https://t.me/imsunpw"),
                twitter: env_or("TWITTER_URL", "#"),
                facebook: env_or("FACEBOOK_URL", "#"),
                instagram: env_or("INSTAGRAM_URL", "#"),
                github: env_or("GITHUB_URL", "https://github.com/jkjoy"),
                dribbble: env_or("DRIBBBLE_URL", "#"),
                linkedin: env_or("LINKEDIN_URL", "#"),
                mastodon: env_or("MASTODON_URL", "https://jiong.us/@sun"),
            },
        })
    }
}

fn parse_extensions(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
