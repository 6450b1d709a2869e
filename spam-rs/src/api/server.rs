//! API Server - HTTP server for the web UI and REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::{handlers, web};
use crate::api::handlers::AppState;
use crate::detector::{DetectorStats, SpamDetector};

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(detector: Arc<SpamDetector>, addr: String) -> Self {
        let state = Arc::new(AppState {
            detector,
            stats: RwLock::new(DetectorStats::default()),
        });

        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // JSON API routes
        let api_routes = Router::new()
            .route("/health", get(handlers::health))
            .route("/classify", post(handlers::classify))
            .route("/stats", get(handlers::stats));

        // Web routes (HTML pages)
        let web_routes = Router::new()
            .route("/", get(web::index_page))
            .route("/classify", post(web::classify_submit));

        Router::new()
            .nest("/api", api_routes)
            .merge(web_routes)
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
