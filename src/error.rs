//! Error Types
//!
//! Every failure inside the analysis pipeline is surfaced to the caller as an
//! `AnalysisError`. Nothing in the library logs an error and carries on: a run
//! either processes and reduces every chunk, or it returns one of these.

use thiserror::Error;

/// Failure kinds of a word-frequency run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A scalar parameter (parallelism or result count) was zero.
    /// Raised before any partitioning or tokenization happens.
    #[error("invalid parameter `{name}` = {value}: must be a positive integer")]
    InvalidParameter { name: &'static str, value: usize },

    /// A worker could not produce the partial table for its chunk.
    /// Fatal for the whole run, no partial output is returned.
    #[error("worker for chunk {chunk} failed: {reason}")]
    WorkerFailure { chunk: usize, reason: String },

    /// The document could not be obtained, so no work was done.
    #[error("failed to obtain document from {source_url}: {reason}")]
    UpstreamFailure { source_url: String, reason: String },
}

impl AnalysisError {
    pub fn invalid(name: &'static str, value: usize) -> Self {
        Self::InvalidParameter { name, value }
    }

    pub fn upstream(source_url: impl Into<String>, reason: impl ToString) -> Self {
        Self::UpstreamFailure {
            source_url: source_url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
