//! Storage traits and error types
//!
//! This module defines the trait interface for document stores and
//! associated error types.

use crate::url::DestinationPath;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid destination: {0}")]
    InvalidDestination(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document store implementations
///
/// Writes for distinct destinations may run concurrently, so implementations
/// must be shareable across tasks.
pub trait DocumentStore: Send + Sync {
    /// Creates the destination folder (and any missing parents) if absent
    ///
    /// # Returns
    ///
    /// The location of the folder, for logging
    fn ensure_folder(&self, folder: &str) -> StorageResult<PathBuf>;

    /// Writes a document, replacing any existing one at the same destination
    ///
    /// # Returns
    ///
    /// The location the document was written to
    fn write_document(&self, dest: &DestinationPath, content: &str) -> StorageResult<PathBuf>;
}
