//! Sumi-Scribe main entry point
//!
//! This is the command-line interface for the Sumi-Scribe site snapshotter.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_scribe::config::{load_config_with_hash, validate, Config};
use sumi_scribe::crawler::Coordinator;
use sumi_scribe::output::{completion_line, print_summary};
use tracing_subscriber::EnvFilter;

/// Sumi-Scribe: snapshot one site as Markdown
///
/// Fetches the seed page, collects every same-origin link on it, and writes
/// each linked page as a Markdown file into a folder named after the host.
#[derive(Parser, Debug)]
#[command(name = "sumi-scribe")]
#[command(version)]
#[command(about = "Snapshot a site's pages as Markdown", long_about = None)]
struct Cli {
    /// Seed URL, including scheme (e.g. https://example.com/)
    #[arg(value_name = "SEED")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages processed at once (overrides config)
    #[arg(long, value_name = "N")]
    concurrency: Option<u32>,

    /// Directory to create the output folder in (overrides config)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logs and the per-page summary; only the completion line is printed
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let coordinator = Coordinator::new(config).context("Failed to set up crawler")?;
    let report = coordinator
        .run(&cli.seed)
        .await
        .with_context(|| format!("Crawl of {} aborted", cli.seed))?;

    if cli.quiet {
        println!("{}", completion_line(&report));
    } else {
        print_summary(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the summary on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_scribe=info,warn"),
            1 => EnvFilter::new("sumi_scribe=debug,info"),
            2 => EnvFilter::new("sumi_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if given and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(concurrency) = cli.concurrency {
        config.crawler.max_concurrent_pages = concurrency;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.root_dir = dir.clone();
    }

    validate(&config).context("Invalid command-line overrides")?;
    Ok(config)
}
