//! Worker Pool Implementation
//!
//! Runs the map phase: one task per chunk, each turning its chunk into an
//! independently owned `FrequencyTable`.
//!
//! ## Responsibilities
//! - **Fork**: spawns one blocking task per chunk, never more than `worker_count` at a time.
//! - **Join**: waits for every task before handing the partial tables back.
//! - **Failure**: the first failed chunk aborts the outstanding tasks and fails the run.

use super::tokenizer::count_tokens;
use super::types::{Chunk, FrequencyTable};
use crate::error::{AnalysisError, Result};

use std::sync::Arc;
use tokio::sync::Semaphore;

/// Thread-safe function that turns one chunk into its partial table.
pub type ChunkMapper = Arc<dyn Fn(&Chunk) -> anyhow::Result<FrequencyTable> + Send + Sync>;

/// Fixed-size fork-join pool for the map phase.
pub struct WorkerPool {
    /// Maximum number of chunks counted concurrently.
    worker_count: usize,
    /// The per-chunk work. Defaults to the word counter.
    mapper: ChunkMapper,
}

impl WorkerPool {
    /// Creates a pool that counts word tokens.
    pub fn new(worker_count: usize) -> Self {
        Self::with_mapper(worker_count, |chunk: &Chunk| Ok(count_tokens(&chunk.text)))
    }

    /// Creates a pool that runs `mapper` on every chunk.
    pub fn with_mapper<F>(worker_count: usize, mapper: F) -> Self
    where
        F: Fn(&Chunk) -> anyhow::Result<FrequencyTable> + Send + Sync + 'static,
    {
        Self {
            worker_count: worker_count.max(1),
            mapper: Arc::new(mapper),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Maps every chunk and returns the partial tables in chunk order.
    ///
    /// Returns only once all tasks have finished. Any mapper error, panic or
    /// cancelled task becomes `WorkerFailure` and no partial tables are returned.
    pub async fn run(&self, chunks: Vec<Chunk>) -> Result<Vec<FrequencyTable>> {
        tracing::debug!(
            "Spawning {} chunk tasks on {} workers",
            chunks.len(),
            self.worker_count
        );

        let permits = Arc::new(Semaphore::new(self.worker_count));
        let mut handles = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            let index = chunk.index;
            let permit = permits.clone().acquire_owned().await.map_err(|e| {
                AnalysisError::WorkerFailure {
                    chunk: index,
                    reason: e.to_string(),
                }
            })?;
            let mapper = self.mapper.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let table = mapper(&chunk)?;
                tracing::trace!(
                    "Chunk {} produced {} distinct tokens",
                    chunk.index,
                    table.len()
                );
                Ok::<_, anyhow::Error>(table)
            });
            handles.push((index, handle));
        }

        let mut partials = Vec::with_capacity(handles.len());
        let mut pending = handles.into_iter();

        while let Some((index, handle)) = pending.next() {
            let failure = match handle.await {
                Ok(Ok(table)) => {
                    partials.push(table);
                    continue;
                }
                Ok(Err(e)) => format!("{:#}", e),
                Err(e) => e.to_string(),
            };

            tracing::error!("Chunk {} failed: {}", index, failure);
            for (_, rest) in pending.by_ref() {
                rest.abort();
            }
            return Err(AnalysisError::WorkerFailure {
                chunk: index,
                reason: failure,
            });
        }

        Ok(partials)
    }
}
