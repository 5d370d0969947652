//! Sequential aggregation of headlines across sources.
//!
//! Sources are scraped one at a time in table order with a fixed politeness
//! delay between consecutive fetches. There is no concurrency and no retry; a
//! source that fails is simply absent from the aggregate for this run.

use crate::extract;
use crate::models::Source;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Fixed pause between consecutive source fetches.
pub const POLITENESS_DELAY: Duration = Duration::from_secs(2);

/// Headlines kept per source in the aggregate report.
pub const HEADLINES_PER_SOURCE: usize = 10;

/// Scrape every source in order and collect the tagged aggregate.
///
/// Each non-empty source contributes its first [`HEADLINES_PER_SOURCE`]
/// headlines, prefixed `"[tag] "`. Prefix groups are contiguous and follow
/// table order. There is no cross-source dedup: the same text from two
/// sources appears once under each tag.
///
/// The politeness delay runs before every source after the first, whether or
/// not the previous fetch succeeded.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn aggregate(client: &Client, sources: &[Source]) -> Vec<String> {
    let mut all_headlines = Vec::new();

    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            debug!(delay = ?POLITENESS_DELAY, "Pausing between sources");
            sleep(POLITENESS_DELAY).await;
        }

        info!(tag = %source.tag, url = %source.url, "Scraping source");
        let headlines = extract::fetch_and_extract(client, source).await;
        if headlines.is_empty() {
            info!(tag = %source.tag, "No headlines found");
            continue;
        }

        info!(count = headlines.len(), tag = %source.tag, "Found headlines");
        all_headlines.extend(tag_headlines(&source.tag, &headlines));
    }

    all_headlines
}

/// Prefix a source's headlines with its tag, keeping the first
/// [`HEADLINES_PER_SOURCE`].
pub fn tag_headlines(tag: &str, headlines: &[String]) -> Vec<String> {
    headlines
        .iter()
        .take(HEADLINES_PER_SOURCE)
        .map(|headline| format!("[{tag}] {headline}"))
        .collect()
}
