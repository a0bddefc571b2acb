//! Map-Reduce Counting Module
//!
//! The word-frequency engine: a document is cut into chunks, each chunk is
//! counted by its own worker, the partial counts are merged and the most
//! frequent tokens are ranked.
//!
//! ## Pipeline
//! 1. **Partition**: `partitioner` cuts the text into `P` positional chunks.
//! 2. **Map**: `worker` counts every chunk in parallel (fork).
//! 3. **Reduce**: `reducer` sums the partial tables once all workers are done (join).
//! 4. **Rank**: `selector` picks the top `N` entries, ties broken alphabetically.
//!
//! ## Submodules
//! - **`engine`**: Validates parameters and runs the pipeline end to end.
//! - **`partitioner`**: Positional chunking of the document.
//! - **`reducer`**: Associative, commutative merge of partial tables.
//! - **`selector`**: Deterministic top-N selection.
//! - **`tokenizer`**: Lowercasing word-character scan.
//! - **`types`**: Document, chunk, table and ranking types.
//! - **`worker`**: Fixed-size fork-join worker pool.

pub mod engine;
pub mod partitioner;
pub mod reducer;
pub mod selector;
pub mod tokenizer;
pub mod types;
pub mod worker;

pub use engine::WordFrequencyEngine;
pub use types::{AnalysisReport, Chunk, Document, FrequencyTable, RankedEntry};
