use super::types::DocumentSource;
use crate::error::{AnalysisError, Result};
use crate::mapreduce::Document;
use std::path::Path;

const START_MARKER: &str = "*** START OF";
const END_MARKER: &str = "*** END OF";

/// Downloads the body of `url` as text.
///
/// Transport errors and non-2xx statuses are both `UpstreamFailure`.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<Document> {
    tracing::info!("Downloading document from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| AnalysisError::upstream(url, err))?;

    let text = response
        .text()
        .await
        .map_err(|err| AnalysisError::upstream(url, err))?;

    tracing::debug!("Downloaded {} bytes from {}", text.len(), url);
    Ok(Document::from(text))
}

/// Reads a local text file.
pub async fn load_document(path: &Path) -> Result<Document> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| AnalysisError::upstream(path.display().to_string(), err))?;

    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(Document::from(text))
}

/// Returns the text between the Project Gutenberg start and end markers.
///
/// The marker lines themselves are dropped. Text without both markers, or
/// with them out of order, is returned unchanged.
pub fn strip_gutenberg(text: &str) -> &str {
    let Some(start_idx) = text.find(START_MARKER) else {
        return text;
    };
    let body_start = text[start_idx..]
        .find('\n')
        .map(|offset| start_idx + offset + 1)
        .unwrap_or(text.len());

    match text[body_start..].find(END_MARKER) {
        Some(end_offset) => text[body_start..body_start + end_offset].trim(),
        None => text,
    }
}

impl DocumentSource {
    /// Obtains the document, optionally stripping Gutenberg boilerplate.
    pub async fn acquire(&self, client: &reqwest::Client, gutenberg: bool) -> Result<Document> {
        let document = match self {
            DocumentSource::Url(url) => fetch_document(client, url).await?,
            DocumentSource::File(path) => load_document(path).await?,
            DocumentSource::Inline(text) => Document::from(text.as_str()),
        };

        if !gutenberg {
            return Ok(document);
        }

        let body = strip_gutenberg(document.as_str());
        if body.len() == document.as_str().len() {
            tracing::warn!("No Gutenberg markers found in {}, keeping full text", self);
            return Ok(document);
        }
        Ok(Document::from(body))
    }
}
