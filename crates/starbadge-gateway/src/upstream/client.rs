//! Shared upstream HTTP client.
//!
//! Built once at startup and cloned into the fetcher; `reqwest::Client`
//! shares its connection pool across clones.

use std::time::Duration;

use reqwest::redirect::Policy;
use starbadge_core::error::{BadgeError, Result};

use crate::config::UpstreamSection;

pub fn build_client(cfg: &UpstreamSection) -> Result<reqwest::Client> {
    let redirect = match cfg.max_redirects {
        0 => Policy::none(),
        n => Policy::limited(n),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_millis(cfg.timeout_ms))
        .redirect(redirect)
        .user_agent(cfg.user_agent.clone())
        .build()
        .map_err(|e| BadgeError::Internal(format!("http client build failed: {e}")))
}
