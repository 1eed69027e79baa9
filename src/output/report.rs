//! Per-run crawl report

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use url::Url;

/// What happened to one worklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The converted document was written
    Saved {
        /// Location of the written document
        path: PathBuf,
    },

    /// Fetching, converting or writing failed; the run continued
    Failed {
        /// Human-readable failure, including the address
        reason: String,
    },
}

impl PageOutcome {
    /// Returns true if the page was written
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Outcome of one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub address: Url,
    pub outcome: PageOutcome,
}

/// Result of a complete crawl run, in worklist order
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The seed address the run started from
    pub seed: Url,

    /// Destination folder name derived from the seed
    pub folder: String,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// One entry per worklist address, seed first
    pub pages: Vec<PageReport>,
}

impl CrawlReport {
    /// Number of documents written
    pub fn saved_count(&self) -> usize {
        self.pages.iter().filter(|p| p.outcome.is_saved()).count()
    }

    /// Number of addresses that failed
    pub fn failed_count(&self) -> usize {
        self.pages.len() - self.saved_count()
    }

    /// Returns true if every worklist address was written
    pub fn is_complete_success(&self) -> bool {
        !self.pages.is_empty() && self.failed_count() == 0
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Iterates over the failed pages
    pub fn failures(&self) -> impl Iterator<Item = (&Url, &str)> {
        self.pages.iter().filter_map(|p| match &p.outcome {
            PageOutcome::Failed { reason } => Some((&p.address, reason.as_str())),
            PageOutcome::Saved { .. } => None,
        })
    }
}
