//! Gallery page server backed by S3-compatible object storage
//!
//! Lists the objects in a bucket, keeps the image files, resolves each key
//! to a viewable URL (CDN prefix when configured, presigned GET otherwise),
//! and renders them into a single HTML page per request.

pub mod error;
pub mod gallery;
pub mod models;
pub mod render;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
