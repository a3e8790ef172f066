//! Top-level facade crate for starbadge.
//!
//! Re-exports the core primitives and the gateway library so users can depend on a single crate.

pub mod core {
    pub use starbadge_core::*;
}

pub mod gateway {
    pub use starbadge_gateway::*;
}
