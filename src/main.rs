//! # Awful Headlines
//!
//! A single-run news headline scraper: fetches the front pages of a
//! configurable set of news sites, extracts headline text with per-site CSS
//! selector lists, deduplicates, and writes a timestamped text report.
//!
//! ## Features
//!
//! - Built-in source table (BBC News, Reuters) or a YAML table via `--sources`
//! - Per-selector length bounds filter out navigation text and fragments
//! - Fixed 2-second politeness delay between source fetches
//! - Generic broad-selector fallback for when every tuned selector goes stale
//! - Swallow-and-log error policy: a run always completes; a missing or
//!   empty report file is the failure signal
//!
//! ## Usage
//!
//! ```sh
//! awful_headlines -o ./reports
//! ```
//!
//! ## Architecture
//!
//! One sequential pass: load the source table, build the shared browser-profile
//! client, scrape each source in order, then render and write the report. No
//! concurrency, no retries, no state between runs beyond the output file.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod client;
mod error;
mod extract;
mod models;
mod report;
mod sources;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("awful_headlines starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.sources, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before paying for fetches
    let output_dir = Path::new(&args.output_dir);
    if let Err(e) = report::ensure_writable_dir(output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    // ---- Source table ----
    let sources = match args.sources {
        Some(ref path) => sources::load_sources(path)?,
        None => sources::builtin_sources(),
    };
    info!(count = sources.len(), "Source table ready");

    let client = client::build_client()?;

    // ---- Scrape and aggregate ----
    let headlines = aggregate::aggregate(&client, &sources).await;

    if !headlines.is_empty() {
        info!(count = headlines.len(), "Aggregated headlines across sources");
        for (i, headline) in headlines.iter().take(5).enumerate() {
            info!(rank = i + 1, %headline, "Top headline");
        }

        let path = output_dir.join(report::DEFAULT_REPORT_FILENAME);
        if let Err(e) = report::write_report(&headlines, &path).await {
            error!(path = %path.display(), error = %e, "Failed to write report");
        }
    } else {
        // Empty means "no headlines or every fetch failed"; the log lines
        // above are the only way to tell which.
        warn!("No headlines from any configured source");

        if let Some(ref url) = args.fallback_url {
            info!(%url, site = %args.fallback_name, "Trying generic extractor");
            let fallback =
                extract::fetch_and_extract_generic(&client, url.as_str(), &args.fallback_name)
                    .await;
            if fallback.is_empty() {
                warn!(site = %args.fallback_name, "Generic extractor found nothing");
            } else {
                let path = output_dir.join(report::report_filename(&args.fallback_name));
                if let Err(e) = report::write_report(&fallback, &path).await {
                    error!(path = %path.display(), error = %e, "Failed to write fallback report");
                }
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
