//! # Logging
//!
//! Tracing subscriber setup for the binary.
//!
//! `RUST_LOG` takes precedence; otherwise `default_level` applies to this
//! crate and to the HTTP trace layer.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("gradebook={default_level},tower_http={default_level}"))
    });

    // Err only when a global subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
