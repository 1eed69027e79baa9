//! Storage module for persisting converted documents
//!
//! This module defines the document store interface used by the crawler and
//! its filesystem implementation:
//! - Creating the per-origin destination folder
//! - Writing one Markdown document per page, overwriting earlier runs

mod fs_store;
mod traits;

pub use fs_store::FsStore;
pub use traits::{DocumentStore, StorageError, StorageResult};
