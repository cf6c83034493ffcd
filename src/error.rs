// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a page could not be fetched. Each kind is reported separately, but
/// the runner treats all of them as "no content".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("connection error fetching {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("timed out after {secs:.1}s fetching {url}")]
    Timeout { url: String, secs: f64 },

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("unexpected error fetching {url}: {source}")]
    Other {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Status code for `Status` failures, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid node query `{0}`")]
    Selector(String),

    #[error("item spec has no fields")]
    NoFields,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("record {row} has fields {found:?}, expected {expected:?}")]
    SchemaMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
