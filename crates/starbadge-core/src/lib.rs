//! starbadge core: transport-agnostic badge primitives and the shared error type.
//!
//! This crate holds the pieces of the badge pipeline that do not touch the
//! network: the number humanizer and the SVG badge template. It carries no
//! runtime or HTTP dependencies so the gateway and tests can share it freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `BadgeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod badge;
pub mod error;
pub mod humanize;

/// Shared result type.
pub use error::{BadgeError, Result};
pub use humanize::humanize;
