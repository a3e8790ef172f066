use std::net::SocketAddr;

use serde::Deserialize;
use starbadge_core::error::{BadgeError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BadgeError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            BadgeError::BadRequest(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

/// Upstream repository API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// API root without trailing slash; requests go to `{base_url}/repos/{repo}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `Accept` header selecting the versioned JSON media type.
    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (connect + headers + body).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// 0 disables following redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            accept: default_accept(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(BadgeError::BadRequest(
                "upstream.base_url must start with http:// or https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(BadgeError::BadRequest(
                "upstream.base_url must not end with '/'".into(),
            ));
        }
        if self.accept.trim().is_empty() {
            return Err(BadgeError::BadRequest("upstream.accept must not be empty".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(BadgeError::BadRequest("upstream.user_agent must not be empty".into()));
        }
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(BadgeError::BadRequest(
                "upstream.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        if self.max_redirects > 20 {
            return Err(BadgeError::BadRequest(
                "upstream.max_redirects must be at most 20".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_base_url() -> String {
    "https://api.github.com".into()
}
fn default_accept() -> String {
    "application/vnd.github.v3+json".into()
}
fn default_user_agent() -> String {
    concat!("starbadge/", env!("CARGO_PKG_VERSION")).into()
}
fn default_timeout_ms() -> u64 {
    5000
}
fn default_max_redirects() -> usize {
    10
}
