//! HTML parser for extracting anchor links
//!
//! Only `<a href="...">` elements count as links. Values are returned exactly
//! as written in the document; resolution and filtering happen in discovery.

use scraper::{Html, Selector};

/// Returns the `href` value of every anchor in document order
///
/// Anchors without an `href` attribute are not returned. Empty values are
/// returned as-is so callers can decide how to treat them.
///
/// # Example
///
/// ```
/// use sumi_scribe::crawler::extract_hrefs;
///
/// let html = r#"<a href="/a">A</a><a name="top"></a><a href="https://other.com/">B</a>"#;
/// assert_eq!(extract_hrefs(html), vec!["/a", "https://other.com/"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
