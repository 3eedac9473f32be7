//! Health Check Routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::server::server_core::ServerState;
use crate::server::types::HealthResponse;
use crate::VERSION;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
        detector: state.detector.name().to_string(),
        uptime: state.uptime().as_secs(),
    })
}
