//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives one run from seed to written documents:
//! - Validating the seed and deriving the destination folder
//! - Creating the folder before any network traffic
//! - Building the worklist with a single discovery pass
//! - Converting and writing every worklist page through a bounded pool
//! - Collecting a per-page report

use crate::config::Config;
use crate::convert::{HtmdConverter, MarkupConverter};
use crate::crawler::discover::discover;
use crate::crawler::page::convert_page;
use crate::crawler::build_http_client;
use crate::output::{CrawlReport, PageOutcome, PageReport};
use crate::storage::{DocumentStore, FsStore};
use crate::url::{folder_identity, parse_seed, DestinationPath};
use crate::ScribeError;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    converter: Arc<dyn MarkupConverter>,
    store: Arc<dyn DocumentStore>,
}

impl Coordinator {
    /// Creates a coordinator with the default converter and a filesystem
    /// store rooted at `config.output.root_dir`
    pub fn new(config: Config) -> Result<Self, ScribeError> {
        let store = Arc::new(FsStore::new(&config.output.root_dir));
        Self::with_components(config, Arc::new(HtmdConverter), store)
    }

    /// Creates a coordinator with caller-supplied converter and store
    pub fn with_components(
        config: Config,
        converter: Arc<dyn MarkupConverter>,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, ScribeError> {
        let client = build_http_client(&config.crawler, &config.user_agent)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            converter,
            store,
        })
    }

    /// Runs a crawl from `seed_arg`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Every worklist address was attempted; individual
    ///   pages may still have failed
    /// * `Err(ScribeError)` - Empty seed, invalid seed, or the destination
    ///   folder could not be created
    pub async fn run(&self, seed_arg: &str) -> Result<CrawlReport, ScribeError> {
        if seed_arg.trim().is_empty() {
            return Err(ScribeError::Usage(
                "a seed URL is required, e.g. https://example.com/".to_string(),
            ));
        }

        let seed = parse_seed(seed_arg).map_err(|source| ScribeError::InvalidAddress {
            input: seed_arg.to_string(),
            source,
        })?;
        let folder = folder_identity(&seed);
        let started_at = Utc::now();

        let folder_path =
            self.store
                .ensure_folder(&folder)
                .map_err(|source| ScribeError::DirectoryCreationFailed {
                    path: folder.clone(),
                    source,
                })?;
        tracing::info!("Writing documents to {}", folder_path.display());

        let worklist = discover(&self.client, &seed).await;

        let concurrency = self.config.crawler.max_concurrent_pages.max(1) as usize;
        tracing::info!(
            "Converting {} page(s), {} at a time",
            worklist.len(),
            concurrency
        );

        let pages: Vec<PageReport> = stream::iter(worklist)
            .map(|url| self.process_page(url, &folder))
            .buffered(concurrency)
            .collect()
            .await;

        let report = CrawlReport {
            seed,
            folder,
            started_at,
            finished_at: Utc::now(),
            pages,
        };

        tracing::info!(
            "Crawl completed: {} saved, {} failed in {:.2}s",
            report.saved_count(),
            report.failed_count(),
            report.duration_seconds()
        );

        Ok(report)
    }

    /// Processes a single worklist address, capturing any failure in the report
    async fn process_page(&self, url: Url, folder: &str) -> PageReport {
        let outcome = match self.save_page(&url, folder).await {
            Ok(path) => {
                tracing::info!("Markdown saved to {}", path.display());
                PageOutcome::Saved { path }
            }
            Err(e) => {
                tracing::warn!("Error processing {}: {}", url, e);
                PageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        PageReport {
            address: url,
            outcome,
        }
    }

    /// Fetches, converts and writes one page
    async fn save_page(&self, url: &Url, folder: &str) -> Result<PathBuf, ScribeError> {
        let page = convert_page(&self.client, self.converter.as_ref(), url).await?;
        let dest = DestinationPath::new(&page.address, folder);

        self.store
            .write_document(&dest, &page.content)
            .map_err(|source| ScribeError::WriteFailed {
                url: url.to_string(),
                source,
            })
    }
}

/// Runs a crawl with the default converter and filesystem store
///
/// # Example
///
/// ```no_run
/// use sumi_scribe::config::Config;
/// use sumi_scribe::crawler::run;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run(Config::default(), "https://example.com/").await?;
/// println!("{} pages saved", report.saved_count());
/// # Ok(())
/// # }
/// ```
pub async fn run(config: Config, seed_arg: &str) -> Result<CrawlReport, ScribeError> {
    Coordinator::new(config)?.run(seed_arg).await
}
