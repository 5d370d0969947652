//! Command-line interface definitions for Awful Headlines.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Running with no arguments reproduces the default behavior: scrape the
//! built-in source table and write `news_headlines.txt` to the current
//! directory.

use clap::Parser;
use url::Url;

/// Command-line arguments for the Awful Headlines scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape the built-in sources into the current directory
/// awful_headlines
///
/// # Scrape a custom source table into ./reports
/// awful_headlines -o ./reports -s sources.yaml
///
/// # Provide a generic-extractor fallback for when every source is empty
/// awful_headlines --fallback-url https://example-news.com --fallback-name "Example News"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the report file is written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Optional path to a YAML source table (defaults to the built-in table)
    #[arg(short, long)]
    pub sources: Option<String>,

    /// URL swept with the generic extractor when no source yields headlines
    #[arg(long)]
    pub fallback_url: Option<Url>,

    /// Site name for the fallback run, used to derive its report filename
    #[arg(long, default_value = "Generic Site")]
    pub fallback_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["awful_headlines"]);
        assert_eq!(cli.output_dir, ".");
        assert!(cli.sources.is_none());
        assert!(cli.fallback_url.is_none());
        assert_eq!(cli.fallback_name, "Generic Site");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "awful_headlines",
            "--output-dir",
            "./reports",
            "--sources",
            "sources.yaml",
        ]);
        assert_eq!(cli.output_dir, "./reports");
        assert_eq!(cli.sources.as_deref(), Some("sources.yaml"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["awful_headlines", "-o", "/tmp/reports", "-s", "/tmp/s.yaml"]);
        assert_eq!(cli.output_dir, "/tmp/reports");
        assert_eq!(cli.sources.as_deref(), Some("/tmp/s.yaml"));
    }

    #[test]
    fn test_cli_fallback_url_must_parse() {
        let cli = Cli::parse_from([
            "awful_headlines",
            "--fallback-url",
            "https://example-news.com",
            "--fallback-name",
            "Example News",
        ]);
        assert_eq!(
            cli.fallback_url.unwrap().as_str(),
            "https://example-news.com/"
        );
        assert_eq!(cli.fallback_name, "Example News");

        let bad = Cli::try_parse_from(["awful_headlines", "--fallback-url", "not a url"]);
        assert!(bad.is_err());
    }
}
