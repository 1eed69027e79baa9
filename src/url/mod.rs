//! URL handling module for Sumi-Scribe
//!
//! This module provides address resolution, origin comparison, and the
//! deterministic mapping from an address to its output location.

mod identity;
mod normalize;

// Re-export main functions
pub use identity::{file_identity, folder_identity, DestinationPath, DOCUMENT_EXTENSION};
pub use normalize::{origin_of, parse_seed, resolve, same_origin};
