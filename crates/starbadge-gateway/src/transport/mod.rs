//! HTTP transport layer.
//!
//! Holds the badge handler; request parsing stays here so the upstream and
//! core layers never see HTTP types.

pub mod badge;
