//! Parallel Word-Frequency Analyzer Library
//!
//! This library crate defines the modules behind the `wordfreq` binary.
//!
//! ## Architecture Modules
//! - **`mapreduce`**: The counting engine. Partitions a document into chunks, counts
//!   each chunk on a fixed-size fork-join worker pool, merges the partial tables and
//!   ranks the top-N tokens with a deterministic tie-break.
//! - **`ingestion`**: Obtains the document (HTTP download or local file) and optionally
//!   strips Project Gutenberg boilerplate.
//! - **`chart`**: Renders a ranking as a horizontal text bar chart.
//! - **`api`**: Axum HTTP endpoints exposing the analyzer.
//! - **`config`**: Run parameters (parallelism, result count) and their validation.
//! - **`error`**: The typed `AnalysisError` every failure is reported through.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod mapreduce;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use mapreduce::{Document, FrequencyTable, RankedEntry, WordFrequencyEngine};
