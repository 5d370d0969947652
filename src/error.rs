//! Error types for the fetch, configuration, and report boundaries.
//!
//! Each operation that can fail returns one of these enums explicitly; there
//! is no catch-all. The decision to degrade a failure to an empty result is
//! made by the caller at the boundary where it happens, visibly.

use thiserror::Error;

/// A failed page fetch: network trouble, timeout, or a non-2xx status.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// A problem loading or validating the source table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read sources file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse sources file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid selector pattern `{0}`")]
    Selector(String),

    #[error("sources file contains no sources")]
    NoSources,
}

/// A failed report write.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
