//! Shared application state for the starbadge gateway.
//!
//! Immutable after construction; cloned per request via `Arc`.

use std::sync::Arc;

use starbadge_core::error::Result;

use crate::config::GatewayConfig;
use crate::upstream::{self, GithubFetcher, MetricSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    source: Arc<dyn MetricSource>,
}

impl AppState {
    /// Build state with the shared upstream client and the GitHub fetcher.
    /// Returns Result so main can report startup errors without panicking.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let client = upstream::build_client(&cfg.upstream)?;
        let fetcher = GithubFetcher::new(client, &cfg.upstream);
        tracing::debug!(
            base_url = %cfg.upstream.base_url,
            timeout_ms = cfg.upstream.timeout_ms,
            max_redirects = cfg.upstream.max_redirects,
            "upstream client ready"
        );
        Ok(Self::with_source(cfg, Arc::new(fetcher)))
    }

    /// Build state around an arbitrary metric source.
    pub fn with_source(cfg: GatewayConfig, source: Arc<dyn MetricSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, source }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn source(&self) -> Arc<dyn MetricSource> {
        Arc::clone(&self.inner.source)
    }
}
