//! Error types for line sources.
//!
//! Responsibilities:
//! - Define error variants for reading configuration lines from a file.
//!
//! Does NOT handle:
//! - Store operation failures. Lookup, creation, and typed-value queries
//!   never error; absence and non-coercibility are represented as values
//!   (the missing sentinel, type-appropriate zeros).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading lines from a configuration source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open config file at {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
