//! Ingestion Data Types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where the text of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    /// Downloaded with an HTTP GET.
    Url(String),
    /// Read from the local filesystem.
    File(PathBuf),
    /// Supplied directly by the caller.
    Inline(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => write!(f, "{}", url),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Inline(_) => write!(f, "<inline>"),
        }
    }
}
