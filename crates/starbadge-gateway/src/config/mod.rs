//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use starbadge_core::error::{BadgeError, Result};

pub use schema::{GatewayConfig, GatewaySection, UpstreamSection};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "starbadge.yaml";

/// Load config from an explicit path, or from `starbadge.yaml` when present.
///
/// An explicit path must exist. Without one, a missing default file falls
/// back to built-in defaults.
pub fn load(path: Option<&str>) -> Result<GatewayConfig> {
    match path {
        Some(p) => load_from_file(p),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        None => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BadgeError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| BadgeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
