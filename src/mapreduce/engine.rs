use super::partitioner::partition;
use super::reducer::reduce;
use super::selector::top_n;
use super::types::{AnalysisReport, Chunk, Document, FrequencyTable};
use super::worker::WorkerPool;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Drives one fork-join word count: partition, map in parallel, reduce, rank.
pub struct WordFrequencyEngine {
    config: AnalysisConfig,
    pool: WorkerPool,
}

impl WordFrequencyEngine {
    /// Validates `config` up front; an invalid config never reaches the pool.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pool: WorkerPool::new(config.parallelism),
            config,
        })
    }

    /// Same as [`new`](Self::new) with a custom per-chunk mapper.
    pub fn with_mapper<F>(config: AnalysisConfig, mapper: F) -> Result<Self>
    where
        F: Fn(&Chunk) -> anyhow::Result<FrequencyTable> + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self {
            pool: WorkerPool::with_mapper(config.parallelism, mapper),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Builds the total frequency table of `document`.
    pub async fn count(&self, document: &Document) -> Result<FrequencyTable> {
        let chunks = partition(document, self.config.parallelism)?;
        let partials = self.pool.run(chunks).await?;

        let total = reduce(partials);
        tracing::debug!(
            "Reduced {} partial tables into {} distinct tokens",
            self.config.parallelism,
            total.len()
        );
        Ok(total)
    }

    /// Counts `document` and ranks its top entries.
    pub async fn analyze(&self, document: &Document) -> Result<AnalysisReport> {
        tracing::info!(
            "Analyzing {} bytes with parallelism {} (top {})",
            document.as_str().len(),
            self.config.parallelism,
            self.config.top_n
        );

        let table = self.count(document).await?;
        let ranking = top_n(&table, self.config.top_n)?;

        let report = AnalysisReport {
            parallelism: self.config.parallelism,
            top_n: self.config.top_n,
            total_tokens: table.total(),
            distinct_tokens: table.len(),
            ranking,
        };

        tracing::info!(
            "Counted {} tokens ({} distinct)",
            report.total_tokens,
            report.distinct_tokens
        );
        Ok(report)
    }
}
