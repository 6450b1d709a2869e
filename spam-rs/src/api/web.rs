//! Web UI pages
//!
//! The single analyzer page: paste a message, submit, read the verdict.

use askama_axum::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::handlers::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    error: String,
    has_result: bool,
    is_spam: bool,
    confidence: String,
    message: String,
}

impl IndexTemplate {
    fn blank() -> Self {
        Self {
            error: String::new(),
            has_result: false,
            is_spam: false,
            confidence: String::new(),
            message: String::new(),
        }
    }
}

#[derive(Deserialize)]
pub struct ClassifyForm {
    message: String,
}

// Analyzer page (GET)
pub async fn index_page() -> impl IntoResponse {
    IndexTemplate::blank()
}

// Analyze form submission (POST)
pub async fn classify_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ClassifyForm>,
) -> Response {
    if form.message.trim().is_empty() {
        return IndexTemplate {
            error: "Please enter a message to analyze.".to_string(),
            ..IndexTemplate::blank()
        }
        .into_response();
    }

    let verdict = state.detector.classify(&form.message);
    info!(
        "Message classified as {} ({:.1}% confidence)",
        verdict.label(),
        verdict.confidence() * 100.0
    );

    state.stats.write().await.record(&verdict);

    IndexTemplate {
        error: String::new(),
        has_result: true,
        is_spam: verdict.is_spam,
        confidence: format!("{:.2}", verdict.confidence() * 100.0),
        message: form.message,
    }
    .into_response()
}
