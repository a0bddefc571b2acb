//! Run Configuration
//!
//! Scalar parameters of a run. Both values must be positive; `validate` is the
//! single gate every entry point (engine, CLI, HTTP API) goes through.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PARALLELISM: usize = 4;
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of chunks, and the size of the worker pool that counts them.
    pub parallelism: usize,
    /// How many ranked entries to report.
    pub top_n: usize,
}

impl AnalysisConfig {
    pub fn new(parallelism: usize, top_n: usize) -> Self {
        Self { parallelism, top_n }
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallelism == 0 {
            return Err(AnalysisError::invalid("parallelism", self.parallelism));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::invalid("top_n", self.top_n));
        }
        Ok(())
    }

    /// Overrides the fields that are set, keeping the rest.
    pub fn with_overrides(self, parallelism: Option<usize>, top_n: Option<usize>) -> Self {
        Self {
            parallelism: parallelism.unwrap_or(self.parallelism),
            top_n: top_n.unwrap_or(self.top_n),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallelism: DEFAULT_PARALLELISM,
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.parallelism, 4);
        assert_eq!(config.top_n, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let err = AnalysisConfig::new(0, 10).validate().unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidParameter { name: "parallelism", value: 0 }
        ));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let err = AnalysisConfig::new(4, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidParameter { name: "top_n", value: 0 }
        ));
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let config = AnalysisConfig::default().with_overrides(None, Some(3));
        assert_eq!(config, AnalysisConfig::new(4, 3));
    }
}
