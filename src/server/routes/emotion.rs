//! Emotion Analysis Routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::emotion::AnalysisReply;
use crate::server::detectors::{DetectorResult, EmotionDetector};
use crate::server::server_core::ServerState;
use crate::server::types::EmotionQuery;

/// Body of the 502 reply when the upstream detector fails
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Emotion service unavailable. Please try again later.";

/// Send `text` unmodified to the detector and classify the result.
///
/// Rejected text becomes [`AnalysisReply::InvalidText`]; upstream failures
/// are returned as errors.
pub async fn analyze_text(detector: &dyn EmotionDetector, text: &str) -> DetectorResult<AnalysisReply> {
    let scores = detector.detect(text).await?;
    Ok(AnalysisReply::from_scores(scores))
}

/// `GET /emotionDetector?textToAnalyze=...`
pub async fn emotion_detector(
    State(state): State<Arc<ServerState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = EmotionQuery::from_pairs(pairs);
    let text = query.text();
    debug!(chars = text.chars().count(), "Analyzing text");

    match analyze_text(state.detector.as_ref(), text).await {
        Ok(reply) => {
            if reply.is_invalid() {
                debug!("Detector returned no dominant emotion");
            }
            (StatusCode::OK, reply.to_string()).into_response()
        }
        Err(e) => {
            warn!(detector = %e.detector(), "Emotion detection failed: {}", e);
            (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE_MESSAGE).into_response()
        }
    }
}
