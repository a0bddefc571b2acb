//! HTTP API Module
//!
//! Exposes the analyzer over HTTP with Axum.
//!
//! ## Endpoints
//! - `POST /analyze`: analyze inline text or a document fetched from a URL.
//! - `GET /health`: liveness probe.
//!
//! ## Submodules
//! - **`handlers`**: Request handlers and error-to-status mapping.
//! - **`types`**: Request and response DTOs.

pub mod handlers;
pub mod types;

use crate::config::AnalysisConfig;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Parameters used when a request does not set its own.
    pub defaults: AnalysisConfig,
    pub client: reqwest::Client,
}

impl ApiState {
    pub fn new(defaults: AnalysisConfig) -> Arc<Self> {
        Arc::new(Self {
            defaults,
            client: reqwest::Client::new(),
        })
    }
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/analyze", post(handlers::handle_analyze))
        .route("/health", get(handlers::handle_health))
        .layer(Extension(state))
}

#[cfg(test)]
mod tests;
