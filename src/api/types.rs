use crate::mapreduce::{AnalysisReport, RankedEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    /// Text to analyze directly. Takes precedence over `url`.
    pub text: Option<String>,
    /// Document to download and analyze.
    pub url: Option<String>,
    pub parallelism: Option<usize>,
    pub top_n: Option<usize>,
    /// Strip Project Gutenberg header and footer before counting.
    #[serde(default)]
    pub gutenberg: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub parallelism: usize,
    pub top_n: usize,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    pub count: usize,
    pub results: Vec<RankedEntry>,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            parallelism: report.parallelism,
            top_n: report.top_n,
            total_tokens: report.total_tokens,
            distinct_tokens: report.distinct_tokens,
            count: report.ranking.len(),
            results: report.ranking,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
