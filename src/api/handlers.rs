use super::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};
use super::ApiState;
use crate::error::AnalysisError;
use crate::ingestion::DocumentSource;
use crate::mapreduce::WordFrequencyEngine;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

pub fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
        AnalysisError::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
        AnalysisError::WorkerFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle_analyze(
    Extension(state): Extension<Arc<ApiState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let config = state.defaults.with_overrides(req.parallelism, req.top_n);

    // Parameters are checked before anything is downloaded.
    let engine = WordFrequencyEngine::new(config).map_err(|err| {
        tracing::debug!("Rejected analyze request: {}", err);
        error_response(status_for(&err), err)
    })?;

    let source = match (req.text, req.url) {
        (Some(text), _) => DocumentSource::Inline(text),
        (None, Some(url)) => DocumentSource::Url(url),
        (None, None) => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "request must contain `text` or `url`",
            ))
        }
    };

    let document = source
        .acquire(&state.client, req.gutenberg)
        .await
        .map_err(|err| {
            tracing::error!("Failed to acquire {}: {}", source, err);
            error_response(status_for(&err), err)
        })?;

    match engine.analyze(&document).await {
        Ok(report) => Ok(Json(report.into())),
        Err(err) => {
            tracing::error!("Analysis of {} failed: {}", source, err);
            Err(error_response(status_for(&err), err))
        }
    }
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
