//! Data models for headline sources and their selector configuration.
//!
//! This module defines the configuration data model used throughout the
//! application:
//! - [`SelectorSpec`]: a CSS selector pattern paired with the length bound
//!   that text matched by it must satisfy
//! - [`Source`]: a named news site with its ordered selector list
//!
//! Both types derive `serde` traits so a source table can be loaded from a
//! YAML file at startup instead of being hardcoded per site.

use serde::{Deserialize, Serialize};

fn default_min_len() -> usize {
    10
}

/// A CSS selector pattern with the length bound governing its matches.
///
/// Selectors are tried independently and in order during extraction. Text
/// produced by a matched element is kept only when its trimmed character
/// count falls within the half-open bound `[min_len, max_len)`.
///
/// # Fields
///
/// * `pattern` - The CSS selector expression (e.g. `h2[data-testid="card-headline"]`)
/// * `min_len` - Minimum accepted length in characters (inclusive, default 10)
/// * `max_len` - Maximum accepted length in characters (exclusive); `None` means unbounded
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectorSpec {
    /// The CSS selector expression to query the document with.
    pub pattern: String,
    /// Minimum accepted headline length in characters (inclusive).
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    /// Maximum accepted headline length in characters (exclusive).
    #[serde(default)]
    pub max_len: Option<usize>,
}

impl SelectorSpec {
    /// Create a spec with a minimum length and no upper bound.
    pub fn new(pattern: &str, min_len: usize) -> Self {
        Self {
            pattern: pattern.to_string(),
            min_len,
            max_len: None,
        }
    }

    /// Create a spec with a full `[min_len, max_len)` bound.
    pub fn bounded(pattern: &str, min_len: usize, max_len: usize) -> Self {
        Self {
            pattern: pattern.to_string(),
            min_len,
            max_len: Some(max_len),
        }
    }

    /// Check whether a trimmed headline satisfies this spec's length bound.
    ///
    /// Lengths are counted in characters, not bytes. The empty string is
    /// always rejected, whatever the configured minimum.
    pub fn accepts(&self, headline: &str) -> bool {
        if headline.is_empty() {
            return false;
        }
        let len = headline.chars().count();
        len >= self.min_len && self.max_len.is_none_or(|max| len < max)
    }
}

/// A named headline source: a tag, a page URL, and its selector list.
///
/// The tag is used to prefix headlines in the aggregate report
/// (`"[BBC] Some headline"`), so the same text scraped from two sources
/// stays attributed to each.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    /// Short label used as the report prefix (e.g. `"BBC"`).
    pub tag: String,
    /// URL of the page to fetch.
    pub url: String,
    /// Ordered selector list tried against the fetched page.
    pub selectors: Vec<SelectorSpec>,
}
