//! # Errors
//!
//! Repository operations are total and never fail. Loading the fixture
//! dataset is the only fallible operation in this crate.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the startup dataset.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A fixture file could not be read.
    #[error("failed to read fixture file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture document is not a JSON array of the expected records.
    #[error("invalid {collection} fixture: {source}")]
    Json {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
