//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Listing and signing failures are distinct variants so callers can decide
//! separately how to degrade; nothing in this crate prints on error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Listing failed: {0}")]
    Listing(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
