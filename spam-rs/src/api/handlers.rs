//! JSON API request handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::detector::{DetectorStats, SpamDetector, Verdict};

/// Shared application state
pub struct AppState {
    pub detector: Arc<SpamDetector>,
    pub stats: RwLock<DetectorStats>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Classification request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct VerdictResponse {
    pub is_spam: bool,
    pub label: String,
    pub spam_probability: f64,
    pub ham_probability: f64,
    pub confidence: f64,
}

impl From<Verdict> for VerdictResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            is_spam: verdict.is_spam,
            label: verdict.label().to_string(),
            spam_probability: verdict.spam_probability,
            ham_probability: verdict.ham_probability,
            confidence: verdict.confidence(),
        }
    }
}

/// Usage statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub messages_scanned: u64,
    pub spam_detected: u64,
    pub ham_detected: u64,
    pub vocabulary_size: usize,
}

/// GET /api/health - liveness check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "spam-rs",
        "version": env!("CARGO_PKG_VERSION"),
        "vocabulary_size": state.detector.vocabulary_size(),
    }))
}

/// POST /api/classify - classify a message
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ApiResponse<VerdictResponse>>, StatusCode> {
    if req.message.trim().is_empty() {
        return Ok(Json(ApiResponse::error("Message is empty")));
    }

    let verdict = state.detector.classify(&req.message);
    debug!(
        "Message classified as {} ({:.1}% confidence)",
        verdict.label(),
        verdict.confidence() * 100.0
    );

    state.stats.write().await.record(&verdict);

    Ok(Json(ApiResponse::success(verdict.into())))
}

/// GET /api/stats - usage counters
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatsResponse>>, StatusCode> {
    let stats = state.stats.read().await;

    Ok(Json(ApiResponse::success(StatsResponse {
        messages_scanned: stats.messages_scanned,
        spam_detected: stats.spam_detected,
        ham_detected: stats.ham_detected,
        vocabulary_size: state.detector.vocabulary_size(),
    })))
}
