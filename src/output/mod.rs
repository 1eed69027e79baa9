//! Output module for crawl reports
//!
//! This module handles:
//! - Recording the outcome of every page in a run
//! - Printing a human-readable summary once the run completes

mod report;
mod summary;

pub use report::{CrawlReport, PageOutcome, PageReport};
pub use summary::{completion_line, format_summary, print_summary};
