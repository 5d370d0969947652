//! Text report rendering and output.
//!
//! One run produces one report file. The format is fixed:
//!
//! ```text
//! News Headlines - Scraped on 2024-01-01 12:00:00
//! ============================================================
//!
//!  1. Some headline text
//!  2. Another headline
//!
//! ============================================================
//! Total headlines: 2
//! ```
//!
//! Rendering is pure (the timestamp is injected), so two renders of the same
//! headlines are byte-identical; [`write_report`] stamps the current local
//! time and overwrites the destination.

use crate::error::ReportError;
use chrono::Local;
use std::fmt::Write as _;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Default report filename for a multi-source run.
pub const DEFAULT_REPORT_FILENAME: &str = "news_headlines.txt";

const RULE_WIDTH: usize = 60;

/// Render a headline report with the given timestamp.
///
/// Headlines are numbered from 1 with 2-digit right-aligned numbering.
pub fn render_report(headlines: &[String], timestamp: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    writeln!(out, "News Headlines - Scraped on {timestamp}").unwrap();
    writeln!(out, "{rule}").unwrap();
    writeln!(out).unwrap();

    for (i, headline) in headlines.iter().enumerate() {
        writeln!(out, "{:2}. {}", i + 1, headline).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "{rule}").unwrap();
    writeln!(out, "Total headlines: {}", headlines.len()).unwrap();

    out
}

/// Write a timestamped headline report, overwriting any existing file.
///
/// # Errors
///
/// Returns [`ReportError`] on any I/O failure. The caller decides whether to
/// log and carry on; nothing is swallowed here.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = headlines.len()))]
pub async fn write_report(headlines: &[String], path: &Path) -> Result<(), ReportError> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = render_report(headlines, &timestamp);
    fs::write(path, report).await?;
    info!("Wrote headline report");
    Ok(())
}

/// Derive a report filename from a site name.
///
/// `"Example News"` becomes `example_news_headlines.txt`. Used by fallback
/// runs so their output does not clobber [`DEFAULT_REPORT_FILENAME`].
pub fn report_filename(site_name: &str) -> String {
    format!(
        "{}_headlines.txt",
        site_name.to_lowercase().replace(' ', "_")
    )
}

/// Ensure a directory exists and is writable before scraping starts.
///
/// Creates the directory if needed, then probes it with a throwaway file.
/// Catching an unwritable output directory up front beats finding out after
/// the politeness delays have been paid.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
