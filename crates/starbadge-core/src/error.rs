//! Shared error type across starbadge crates.

use thiserror::Error;

/// Stable error codes (used in logs and config diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BadgeError>;

/// Unified error type used by core and gateway.
///
/// Badge requests never produce one of these; they only come out of startup
/// paths (config, client construction, socket bind).
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl BadgeError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            BadgeError::BadRequest(_) => ClientCode::BadRequest,
            BadgeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            BadgeError::Internal(_) => ClientCode::Internal,
        }
    }
}
