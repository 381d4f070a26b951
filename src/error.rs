//! # Error Types
//!
//! Typed errors for the history core. The binary wraps these in
//! [`anyhow`] at the presentation boundary and maps them to exit codes;
//! the library itself never aborts the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the history core.
#[derive(Debug, Error)]
pub enum Error {
    /// The root configuration is unusable (e.g. an empty root list).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The backing file could not be read, written, or created.
    #[error("history file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not contain a valid history document.
    #[error("history file {} is not valid history data: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
