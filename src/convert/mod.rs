//! Markup-to-Markdown conversion
//!
//! The crawler only depends on the [`MarkupConverter`] trait. The default
//! implementation, [`HtmdConverter`], holds no state and converts each page
//! with `htmd`'s standard rules (headings, lists, emphasis, links).

use thiserror::Error;

/// Errors raised while converting a page
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("HTML conversion error: {0}")]
    Html(#[from] std::io::Error),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Converts a markup document into Markdown text
pub trait MarkupConverter: Send + Sync {
    /// Converts `markup` and returns the Markdown text
    fn convert(&self, markup: &str) -> ConvertResult<String>;
}

/// Default converter backed by `htmd`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmdConverter;

impl MarkupConverter for HtmdConverter {
    fn convert(&self, markup: &str) -> ConvertResult<String> {
        Ok(htmd::convert(markup)?)
    }
}
