//! Sumi-Scribe: a single-origin site-to-Markdown snapshotter
//!
//! This crate fetches a seed page, collects the same-origin links it points to,
//! converts every collected page from HTML to Markdown, and writes one document
//! per page into a folder named after the seed's host.

pub mod config;
pub mod convert;
pub mod crawler;
pub mod output;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Invalid address '{input}': {source}")]
    InvalidAddress { input: String, source: UrlError },

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Conversion failed for {url}: {source}")]
    ConversionFailed { url: String, source: ConvertError },

    #[error("Failed to create destination folder {path}: {source}")]
    DirectoryCreationFailed { path: String, source: StorageError },

    #[error("Failed to write document for {url}: {source}")]
    WriteFailed { url: String, source: StorageError },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

pub use convert::ConvertError;
pub use storage::StorageError;

/// Result type alias for Sumi-Scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run, Coordinator};
pub use output::{CrawlReport, PageOutcome, PageReport};
pub use self::url::{
    file_identity, folder_identity, origin_of, resolve, same_origin, DestinationPath,
};
