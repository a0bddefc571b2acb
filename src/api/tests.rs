//! API Module Tests
//!
//! Calls the Axum handlers directly, without binding a socket.
//!
//! ## Test Scopes
//! - **Analyze**: Successful runs, parameter defaults and overrides.
//! - **Errors**: Status codes for each failure kind.
//! - **Serialization**: JSON shape of requests and responses.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{handle_analyze, handle_health, status_for};
    use crate::api::types::{AnalyzeRequest, AnalyzeResponse};
    use crate::api::ApiState;
    use crate::config::AnalysisConfig;
    use crate::error::AnalysisError;
    use crate::mapreduce::RankedEntry;
    use axum::http::StatusCode;
    use axum::{Extension, Json};

    fn state() -> Extension<std::sync::Arc<ApiState>> {
        Extension(ApiState::new(AnalysisConfig::new(2, 3)))
    }

    fn text_request(text: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    // ============================================================
    // ANALYZE
    // ============================================================

    #[tokio::test]
    async fn test_analyze_inline_text_uses_defaults() {
        let Json(response) = handle_analyze(state(), Json(text_request("b a b c b a")))
            .await
            .unwrap();

        assert_eq!(response.parallelism, 2);
        assert_eq!(response.top_n, 3);
        assert_eq!(response.count, 3);
        assert_eq!(response.results[0], RankedEntry::new("b", 3));
        assert_eq!(response.results[1], RankedEntry::new("a", 2));
        assert_eq!(response.results[2], RankedEntry::new("c", 1));
    }

    #[tokio::test]
    async fn test_analyze_request_overrides() {
        let request = AnalyzeRequest {
            parallelism: Some(1),
            top_n: Some(1),
            ..text_request("the cat sat on the mat")
        };

        let Json(response) = handle_analyze(state(), Json(request)).await.unwrap();

        assert_eq!(response.parallelism, 1);
        assert_eq!(response.results, vec![RankedEntry::new("the", 2)]);
        assert_eq!(response.total_tokens, 6);
        assert_eq!(response.distinct_tokens, 5);
    }

    #[tokio::test]
    async fn test_analyze_empty_text_is_not_an_error() {
        let Json(response) = handle_analyze(state(), Json(text_request("")))
            .await
            .unwrap();

        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
    }

    // ============================================================
    // ERRORS
    // ============================================================

    #[tokio::test]
    async fn test_analyze_without_source_is_bad_request() {
        let (status, Json(body)) = handle_analyze(state(), Json(AnalyzeRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("text"));
    }

    #[tokio::test]
    async fn test_analyze_zero_top_n_is_bad_request() {
        let request = AnalyzeRequest {
            top_n: Some(0),
            ..text_request("words")
        };

        let (status, Json(body)) = handle_analyze(state(), Json(request)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("top_n"));
    }

    #[tokio::test]
    async fn test_analyze_unreachable_url_is_bad_gateway() {
        let request = AnalyzeRequest {
            url: Some("http://127.0.0.1:1/book.txt".to_string()),
            ..Default::default()
        };

        let (status, _) = handle_analyze(state(), Json(request)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&AnalysisError::invalid("parallelism", 0)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&AnalysisError::upstream("http://x", "timeout")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&AnalysisError::WorkerFailure {
                chunk: 0,
                reason: "boom".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_health() {
        let Json(response) = handle_health().await;
        assert_eq!(response.status, "ok");
    }

    // ============================================================
    // SERIALIZATION
    // ============================================================

    #[test]
    fn test_request_defaults_when_fields_missing() {
        let request: AnalyzeRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();

        assert_eq!(request.text.as_deref(), Some("hi"));
        assert!(request.url.is_none());
        assert!(request.parallelism.is_none());
        assert!(!request.gutenberg);
    }

    #[test]
    fn test_response_serialization() {
        let response = AnalyzeResponse {
            parallelism: 4,
            top_n: 2,
            total_tokens: 9,
            distinct_tokens: 6,
            count: 2,
            results: vec![RankedEntry::new("the", 3), RankedEntry::new("cat", 2)],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["results"][0]["token"], "the");
        assert_eq!(json["results"][0]["count"], 3);
        assert_eq!(json["distinct_tokens"], 6);
    }
}
