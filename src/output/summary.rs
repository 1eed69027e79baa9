//! Human-readable run summary

use crate::output::report::{CrawlReport, PageOutcome};

/// Formats a crawl report for the terminal
pub fn format_summary(report: &CrawlReport) -> String {
    let mut out = String::new();

    out.push_str("=== Sumi-Scribe Crawl Summary ===\n\n");
    out.push_str(&format!("Seed:     {}\n", report.seed));
    out.push_str(&format!("Folder:   {}\n", report.folder));
    out.push_str(&format!(
        "Started:  {}\n",
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Duration: {:.2}s\n\n", report.duration_seconds()));

    out.push_str(&format!(
        "Pages: {} discovered, {} saved, {} failed\n",
        report.pages.len(),
        report.saved_count(),
        report.failed_count()
    ));

    for page in &report.pages {
        match &page.outcome {
            PageOutcome::Saved { path } => {
                out.push_str(&format!("  ✓ {} -> {}\n", page.address, path.display()));
            }
            PageOutcome::Failed { reason } => {
                out.push_str(&format!("  ✗ {} ({})\n", page.address, reason));
            }
        }
    }

    out.push('\n');
    out.push_str(&completion_line(report));
    out.push('\n');
    out
}

/// One-line completion message, printed even when the summary is suppressed
pub fn completion_line(report: &CrawlReport) -> String {
    format!(
        "All pages processed. ({} saved, {} failed)",
        report.saved_count(),
        report.failed_count()
    )
}

/// Prints the summary to stdout
pub fn print_summary(report: &CrawlReport) {
    print!("{}", format_summary(report));
}
