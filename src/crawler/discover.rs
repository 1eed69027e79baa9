//! Link discovery
//!
//! Builds the worklist for a run from the seed page: the seed first, followed
//! by every distinct same-origin anchor target in the order it first appears.
//! Discovered pages are not scanned themselves.

use crate::crawler::fetcher::fetch_url;
use crate::crawler::parser::extract_hrefs;
use crate::url::{resolve, same_origin};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Fetches the seed page and returns the worklist
///
/// A failed seed fetch does not abort the run: it is logged and the worklist
/// falls back to the seed alone.
pub async fn discover(client: &Client, seed: &Url) -> Vec<Url> {
    let body = match fetch_url(client, seed).await.into_body(seed) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Link discovery failed: {}", e);
            return vec![seed.clone()];
        }
    };

    let worklist = collect_worklist(seed, &body);
    tracing::info!(
        "Discovered {} same-origin page(s) from {}",
        worklist.len() - 1,
        seed
    );
    worklist
}

/// Builds the worklist from the seed page's markup
///
/// Empty hrefs, unresolvable hrefs and cross-origin targets are skipped.
/// Deduplication is by exact resolved address, so `/a` and `/a#top` are two
/// entries.
pub fn collect_worklist(seed: &Url, html: &str) -> Vec<Url> {
    let mut worklist = vec![seed.clone()];
    let mut seen: HashSet<Url> = HashSet::from([seed.clone()]);

    for href in extract_hrefs(html) {
        if href.trim().is_empty() {
            continue;
        }

        let url = match resolve(&href, seed) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Skipping unresolvable href '{}': {}", href, e);
                continue;
            }
        };

        if !same_origin(&url, seed) {
            tracing::trace!("Skipping cross-origin link {}", url);
            continue;
        }

        if seen.insert(url.clone()) {
            worklist.push(url);
        }
    }

    worklist
}
