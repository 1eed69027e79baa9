//! Page conversion
//!
//! Fetches one worklist address and converts its markup to Markdown.

use crate::convert::MarkupConverter;
use crate::crawler::fetcher::fetch_url;
use crate::ScribeError;
use reqwest::Client;
use url::Url;

/// A converted page, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPage {
    /// Address the markup was fetched from
    pub address: Url,

    /// Markdown content
    pub content: String,
}

/// Fetches `url` and converts the body with `converter`
///
/// # Errors
///
/// * `FetchFailed` - transport error or non-success status
/// * `ConversionFailed` - the converter rejected the markup
pub async fn convert_page(
    client: &Client,
    converter: &dyn MarkupConverter,
    url: &Url,
) -> Result<ConvertedPage, ScribeError> {
    let markup = fetch_url(client, url).await.into_body(url)?;

    let content = converter
        .convert(&markup)
        .map_err(|source| ScribeError::ConversionFailed {
            url: url.to_string(),
            source,
        })?;

    Ok(ConvertedPage {
        address: url.clone(),
        content,
    })
}
