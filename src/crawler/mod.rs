//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing and anchor extraction
//! - Worklist discovery from the seed page
//! - Per-page conversion
//! - Overall crawl coordination

mod coordinator;
mod discover;
mod fetcher;
mod page;
mod parser;

pub use coordinator::{run, Coordinator};
pub use discover::{collect_worklist, discover};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use page::{convert_page, ConvertedPage};
pub use parser::extract_hrefs;
