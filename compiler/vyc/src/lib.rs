//! Vyper diagnostic driver.
//!
//! The top-level collaborator of `vy_diagnostic`: it builds the rendering
//! configuration once per run, catches every failure family at the top, and
//! decides how each one is reported and which exit code it maps to.

pub mod commands;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=vyc=debug` or `RUST_LOG=vy_diagnostic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
