//! # Gradebook Library
//!
//! This library exposes the Gradebook modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

// Re-export gradebook_core for convenience
pub use gradebook_core;
