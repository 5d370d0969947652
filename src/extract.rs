//! Headline extraction from fetched documents.
//!
//! The extractor is generic over its selector list: it knows nothing about
//! any particular site. For each [`SelectorSpec`] it queries the document,
//! normalizes the text of every match, applies that spec's length bound, and
//! dedups the survivors while preserving first-seen order.
//!
//! # Error policy
//!
//! [`fetch_document`] returns an explicit [`FetchError`]. The decision to
//! swallow that error and carry on is made one layer up, in
//! [`fetch_and_extract`], where an empty result means "zero headlines or a
//! transient failure" and callers must not read it as success.

use crate::error::FetchError;
use crate::models::{SelectorSpec, Source};
use crate::sources::GENERIC_SELECTORS;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

/// Cap on headlines kept from a generic fallback sweep.
pub const GENERIC_HEADLINE_CAP: usize = 20;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extract headlines from a parsed document using an ordered selector list.
///
/// Selectors are tried independently; a spec whose pattern fails to parse is
/// logged and skipped, and a document with zero matches for every selector
/// yields an empty result, not an error. Matched text is whitespace-collapsed
/// and trimmed before the spec's `[min, max)` bound is applied.
///
/// # Returns
///
/// Accepted headlines in first-seen order with exact duplicates removed.
pub fn extract(document: &Html, specs: &[SelectorSpec]) -> Vec<String> {
    let mut headlines = Vec::new();

    for spec in specs {
        let selector = match Selector::parse(&spec.pattern) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(pattern = %spec.pattern, error = %e, "Skipping unparsable selector");
                continue;
            }
        };

        for element in document.select(&selector) {
            let joined = element.text().collect::<Vec<_>>().join(" ");
            let text = WHITESPACE.replace_all(&joined, " ").trim().to_string();
            if spec.accepts(&text) {
                headlines.push(text);
            }
        }
    }

    headlines.into_iter().unique().collect()
}

/// Fetch a page and parse it into a document.
///
/// # Errors
///
/// Returns [`FetchError::Network`] for connection, timeout, and body-read
/// failures, and [`FetchError::Status`] for any non-2xx response.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page body");
    Ok(Html::parse_document(&body))
}

/// Fetch a source's page and extract its headlines.
///
/// Any fetch failure is logged naming the source and degraded to an empty
/// result; within a run a failed source is final. An empty return therefore
/// means "zero headlines or a transient failure", never a success signal.
#[instrument(level = "info", skip_all, fields(tag = %source.tag))]
pub async fn fetch_and_extract(client: &Client, source: &Source) -> Vec<String> {
    match fetch_document(client, &source.url).await {
        Ok(document) => {
            let headlines = extract(&document, &source.selectors);
            debug!(count = headlines.len(), "Extracted headlines");
            headlines
        }
        Err(e) => {
            warn!(url = %source.url, error = %e, "Fetch failed; treating as no headlines");
            Vec::new()
        }
    }
}

/// Extract headlines with the broad generic selector sweep.
///
/// Lower precision than a tuned source table, so the result is capped at the
/// first [`GENERIC_HEADLINE_CAP`] deduplicated headlines.
pub fn extract_generic(document: &Html) -> Vec<String> {
    let mut headlines = extract(document, GENERIC_SELECTORS.as_slice());
    headlines.truncate(GENERIC_HEADLINE_CAP);
    headlines
}

/// Fetch an arbitrary news page and run the generic extractor over it.
///
/// Best-effort degraded mode for when every named source comes back empty.
/// Same swallow-and-log policy as [`fetch_and_extract`].
#[instrument(level = "info", skip_all, fields(%url, %site_name))]
pub async fn fetch_and_extract_generic(client: &Client, url: &str, site_name: &str) -> Vec<String> {
    match fetch_document(client, url).await {
        Ok(document) => {
            let headlines = extract_generic(&document);
            info!(count = headlines.len(), "Extracted headlines with generic selectors");
            headlines
        }
        Err(e) => {
            warn!(error = %e, "Generic fetch failed; treating as no headlines");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::build_client;

    fn spec(pattern: &str, min_len: usize) -> SelectorSpec {
        SelectorSpec::new(pattern, min_len)
    }

    #[test]
    fn test_extract_collapses_duplicates() {
        let html = Html::parse_document(
            "<html><body>\
             <h2 class=\"headline\">Economy grows 3%</h2>\
             <h2 class=\"headline\">Economy grows 3%</h2>\
             </body></html>",
        );
        let headlines = extract(&html, &[spec("h2.headline", 10)]);
        assert_eq!(headlines, vec!["Economy grows 3%"]);
    }

    #[test]
    fn test_extract_rejects_below_minimum_length() {
        let html = Html::parse_document("<html><body><h2>Hi</h2></body></html>");
        let headlines = extract(&html, &[spec("h2", 10)]);
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_extract_zero_matches_is_empty_not_error() {
        let html = Html::parse_document("<html><body><p>no headings here</p></body></html>");
        let headlines = extract(&html, &[spec("h2", 10)]);
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_extract_preserves_first_seen_order() {
        let html = Html::parse_document(
            "<html><body>\
             <h2>First headline text</h2>\
             <h3>Second headline text</h3>\
             <h2>Third headline text</h2>\
             </body></html>",
        );
        // h2 selector runs first, so both h2 matches precede the h3 match.
        let headlines = extract(&html, &[spec("h2", 10), spec("h3", 10)]);
        assert_eq!(
            headlines,
            vec![
                "First headline text",
                "Third headline text",
                "Second headline text"
            ]
        );
    }

    #[test]
    fn test_extract_normalizes_whitespace() {
        let html = Html::parse_document(
            "<html><body><h2>  Economy \n\t grows   <em>3%</em>  </h2></body></html>",
        );
        let headlines = extract(&html, &[spec("h2", 10)]);
        assert_eq!(headlines, vec!["Economy grows 3%"]);
    }

    #[test]
    fn test_extract_trim_is_idempotent() {
        let html =
            Html::parse_document("<html><body><h2>   Padded headline text   </h2></body></html>");
        let headlines = extract(&html, &[spec("h2", 10)]);
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].trim(), headlines[0]);
    }

    #[test]
    fn test_extract_skips_unparsable_selector() {
        let html = Html::parse_document("<html><body><h2>A usable headline</h2></body></html>");
        let headlines = extract(&html, &[spec("h2[[", 10), spec("h2", 10)]);
        assert_eq!(headlines, vec!["A usable headline"]);
    }

    #[test]
    fn test_extract_per_spec_bounds_govern_their_own_matches() {
        let html = Html::parse_document(
            "<html><body>\
             <h2>Short one</h2>\
             <h3>Short two</h3>\
             </body></html>",
        );
        // 9 chars each: passes the min-5 spec, fails the min-10 spec.
        let headlines = extract(&html, &[spec("h2", 5), spec("h3", 10)]);
        assert_eq!(headlines, vec!["Short one"]);
    }

    #[test]
    fn test_extract_generic_matches_class_substrings_and_hrefs() {
        let html = Html::parse_document(
            "<html><body>\
             <div class=\"main-headline-block\">Markets rally on rate cut hopes</div>\
             <a href=\"/news/2024/local-story\">Council approves new transit plan</a>\
             <span class=\"byline\">By A Reporter</span>\
             </body></html>",
        );
        let headlines = extract_generic(&html);
        assert_eq!(
            headlines,
            vec![
                "Markets rally on rate cut hopes",
                "Council approves new transit plan"
            ]
        );
    }

    #[test]
    fn test_extract_generic_enforces_strict_bound() {
        let long = "x".repeat(200);
        let html = Html::parse_document(&format!(
            "<html><body><h1>Too short</h1><h1>{long}</h1></body></html>"
        ));
        // 9 chars is under the 15 minimum; 200 chars hits the exclusive cap.
        assert!(extract_generic(&html).is_empty());
    }

    #[test]
    fn test_extract_generic_caps_at_twenty() {
        let mut body = String::new();
        for i in 0..30 {
            body.push_str(&format!("<h2>Generic headline number {i:02}</h2>"));
        }
        let html = Html::parse_document(&format!("<html><body>{body}</body></html>"));
        let headlines = extract_generic(&html);
        assert_eq!(headlines.len(), GENERIC_HEADLINE_CAP);
        assert_eq!(headlines[0], "Generic headline number 00");
    }

    #[tokio::test]
    async fn test_fetch_and_extract_swallows_connection_failure() {
        let client = build_client().unwrap();
        let source = Source {
            tag: "Unreachable".to_string(),
            url: "http://127.0.0.1:9/news".to_string(),
            selectors: vec![spec("h2", 10)],
        };
        // Nothing listens on the discard port; the fetch error must degrade
        // to an empty result instead of surfacing.
        let headlines = fetch_and_extract(&client, &source).await;
        assert!(headlines.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_document_reports_connection_failure() {
        let client = build_client().unwrap();
        let result = fetch_document(&client, "http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
