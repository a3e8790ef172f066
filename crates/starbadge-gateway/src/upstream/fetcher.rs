use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use serde_json::{Map, Value};

use crate::config::UpstreamSection;
use crate::upstream::{FetchError, Fetched, MetricSource};

const STARGAZERS_FIELD: &str = "stargazers_count";

/// Extract the stargazer count from a repository metadata body.
///
/// The body must be a JSON object; every key other than `stargazers_count`
/// is ignored. Fractional values truncate toward zero; negative values clamp
/// to 0.
pub fn parse_stargazers(body: &[u8]) -> Result<u64, FetchError> {
    let mut fields: Map<String, Value> = serde_json::from_slice(body).map_err(FetchError::Parse)?;
    let raw = match fields.remove(STARGAZERS_FIELD) {
        None | Some(Value::Null) => return Err(FetchError::MissingField),
        Some(v) => v,
    };
    let count: f64 = serde_json::from_value(raw).map_err(FetchError::Parse)?;
    // float -> int `as` truncates and saturates
    Ok(count as u64)
}

/// Reads `stargazers_count` from `GET {base_url}/repos/{repo}`.
#[derive(Clone)]
pub struct GithubFetcher {
    client: reqwest::Client,
    base_url: String,
    accept: String,
}

impl GithubFetcher {
    pub fn new(client: reqwest::Client, cfg: &UpstreamSection) -> Self {
        Self {
            client,
            base_url: cfg.base_url.clone(),
            accept: cfg.accept.clone(),
        }
    }

    pub fn repo_url(&self, repo: &str) -> String {
        format!("{}/repos/{}", self.base_url, repo)
    }

    async fn try_fetch(&self, repo: &str) -> Result<u64, FetchError> {
        let req = self
            .client
            .get(self.repo_url(repo))
            .header(ACCEPT, self.accept.as_str())
            .build()
            .map_err(FetchError::Request)?;

        let resp = self.client.execute(req).await.map_err(FetchError::Transport)?;
        // Status is informational only; error bodies fall through to parsing.
        tracing::debug!(status = %resp.status(), "upstream responded");

        let body: Bytes = resp.bytes().await.map_err(FetchError::Body)?;
        parse_stargazers(&body)
    }
}

#[async_trait]
impl MetricSource for GithubFetcher {
    async fn fetch(&self, repo: &str) -> Fetched {
        let fetched = Fetched::from(self.try_fetch(repo).await);
        if let Fetched::Fallback(e) = &fetched {
            tracing::warn!(
                repo = %repo,
                kind = e.kind(),
                error = e as &dyn std::error::Error,
                "stargazer lookup failed, using 0"
            );
        }
        fetched
    }
}
