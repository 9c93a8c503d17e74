//! Line sources that feed the store.
//!
//! Responsibilities:
//! - Define the `LineSource` contract: zero or more lines, in order, then
//!   completion. Sources are drained fully before the store is queried.
//! - Provide `FileSource`, which reads from an explicit caller-supplied
//!   path. There is no implicit default location; path defaults belong to
//!   the caller (the CLI supplies `config.txt`).
//!
//! Does NOT handle:
//! - Parsing line contents (see `Store::parse_line`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::debug;

use crate::error::SourceError;

/// A supplier of raw configuration lines.
pub trait LineSource {
    /// Produce all lines, in order. Called once; the store consumes the
    /// result in full before serving queries.
    fn read_lines(self) -> Result<Vec<String>, SourceError>;
}

/// Reads configuration lines from a file at an explicit path.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn read_lines(self) -> Result<Vec<String>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?);
        }
        debug!(path = %self.path.display(), count = lines.len(), "read configuration lines");
        Ok(lines)
    }
}

/// In-memory source, mainly for tests and examples.
impl LineSource for &str {
    fn read_lines(self) -> Result<Vec<String>, SourceError> {
        Ok(self.lines().map(String::from).collect())
    }
}
