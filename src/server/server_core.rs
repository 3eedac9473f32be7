//! Emotion Server Core
//!
//! Main server implementation with Axum web framework

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::server::config::ServerConfig;
use crate::server::detectors::{DetectorResult, EmotionDetector, WatsonDetector};
use crate::server::routes;

/// Server state shared across handlers
pub struct ServerState {
    /// Server configuration
    pub config: ServerConfig,
    /// Upstream emotion detector
    pub detector: Arc<dyn EmotionDetector>,
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig, detector: Arc<dyn EmotionDetector>) -> Self {
        Self {
            config,
            detector,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Index page
        .route("/", get(routes::index::render_index_page))
        .route("/static/mywebscript.js", get(routes::index::web_script))

        // Analysis
        .route("/emotionDetector", get(routes::emotion::emotion_detector))

        // Health check
        .route("/health", get(routes::health::health_check))

        .with_state(state)
        // Middleware (last layer runs first)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

/// Emotion detection web server
pub struct EmotionServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl EmotionServer {
    /// Create a server backed by the Watson detector from `config.detector`
    pub fn new(config: ServerConfig) -> DetectorResult<Self> {
        let detector = WatsonDetector::new(config.detector.clone())?;
        Ok(Self::with_detector(config, Arc::new(detector)))
    }

    /// Create a server backed by any detector
    pub fn with_detector(config: ServerConfig, detector: Arc<dyn EmotionDetector>) -> Self {
        let state = Arc::new(ServerState::new(config.clone(), detector));
        Self { config, state }
    }

    /// Build the router for this server
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            "Starting emotion detector on {} (detector: {})",
            addr,
            self.state.detector.name()
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }

    /// Get server state
    pub fn state(&self) -> Arc<ServerState> {
        self.state.clone()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
