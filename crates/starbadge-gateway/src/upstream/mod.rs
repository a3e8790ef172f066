//! Upstream metric lookup.
//!
//! `MetricSource` is the seam between the badge route and the network. The
//! production implementation (`GithubFetcher`) asks the repository API for
//! the stargazer count. Every failure is absorbed into `Fetched::Fallback`,
//! so callers always get a renderable value while tests can still see why a
//! zero was produced.

pub mod client;
pub mod fetcher;

use async_trait::async_trait;
use thiserror::Error;

pub use client::build_client;
pub use fetcher::{parse_stargazers, GithubFetcher};

/// Why a fetch fell back to zero.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request construction failed")]
    Request(#[source] reqwest::Error),
    #[error("transport failed")]
    Transport(#[source] reqwest::Error),
    #[error("body read failed")]
    Body(#[source] reqwest::Error),
    #[error("json parse failed")]
    Parse(#[source] serde_json::Error),
    #[error("stargazers_count missing")]
    MissingField,
}

impl FetchError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "request",
            FetchError::Transport(_) => "transport",
            FetchError::Body(_) => "body",
            FetchError::Parse(_) => "parse",
            FetchError::MissingField => "missing_field",
        }
    }
}

/// Result of a metric lookup.
#[derive(Debug)]
pub enum Fetched {
    /// Value read from the upstream response.
    Live(u64),
    /// Lookup failed; the badge shows 0.
    Fallback(FetchError),
}

impl Fetched {
    /// Count to display (0 on fallback).
    pub fn value(&self) -> u64 {
        match self {
            Fetched::Live(n) => *n,
            Fetched::Fallback(_) => 0,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }
}

impl From<Result<u64, FetchError>> for Fetched {
    fn from(r: Result<u64, FetchError>) -> Self {
        match r {
            Ok(n) => Fetched::Live(n),
            Err(e) => Fetched::Fallback(e),
        }
    }
}

/// Source of the popularity metric for a repository identifier.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Never fails: errors come back as `Fetched::Fallback`.
    async fn fetch(&self, repo: &str) -> Fetched;
}
