//! Watson NLP Emotion Detector
//!
//! Client for the Watson NLP `EmotionPredict` runtime endpoint.
//! Sends `{"raw_document": {"text": ...}}` and reads the first entry of
//! `emotionPredictions`. A 400 answer means the service rejected the text.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::emotion::EmotionScoreSet;
use crate::server::config::DetectorConfig;
use crate::server::detectors::error::{DetectorError, DetectorResult};
use crate::server::detectors::traits::EmotionDetector;

/// Header selecting the Watson model
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Watson emotion detector
pub struct WatsonDetector {
    config: DetectorConfig,
    client: Client,
}

/// Watson request body
#[derive(Debug, Serialize)]
struct EmotionPredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

/// Watson response body (fields we read)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmotionPredictResponse {
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize)]
struct EmotionPrediction {
    emotion: PredictedScores,
}

#[derive(Debug, Deserialize)]
struct PredictedScores {
    anger: f64,
    disgust: f64,
    fear: f64,
    joy: f64,
    sadness: f64,
}

impl WatsonDetector {
    /// Create new Watson detector
    pub fn new(config: DetectorConfig) -> DetectorResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(DetectorError::config(&config.name, "base_url is required"));
        }
        if config.timeout == 0 {
            return Err(DetectorError::config(&config.name, "timeout must be at least 1 second"));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            MODEL_ID_HEADER,
            config.model_id.parse().map_err(|e| {
                DetectorError::config(&config.name, format!("Invalid model id: {}", e))
            })?,
        );
        if let Some(api_key) = &config.api_key {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", api_key).parse().map_err(|e| {
                    DetectorError::config(&config.name, format!("Invalid API key: {}", e))
                })?,
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                DetectorError::config(&config.name, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn parse_scores(&self, body: &str) -> DetectorResult<EmotionScoreSet> {
        let parsed: EmotionPredictResponse = serde_json::from_str(body)
            .map_err(|e| DetectorError::response(self.name(), e.to_string()))?;

        let prediction = parsed
            .emotion_predictions
            .into_iter()
            .next()
            .ok_or_else(|| DetectorError::response(self.name(), "empty emotionPredictions"))?;

        let s = prediction.emotion;
        let scores = [s.anger, s.disgust, s.fear, s.joy, s.sadness];
        if !scores.iter().all(|v| v.is_finite()) {
            return Err(DetectorError::response(self.name(), "non-finite emotion score"));
        }

        Ok(EmotionScoreSet::from_scores(s.anger, s.disgust, s.fear, s.joy, s.sadness))
    }
}

#[async_trait]
impl EmotionDetector for WatsonDetector {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn detect(&self, text: &str) -> DetectorResult<EmotionScoreSet> {
        let body = EmotionPredictRequest {
            raw_document: RawDocument { text },
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DetectorError::transport(self.name(), format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text_body = response
            .text()
            .await
            .map_err(|e| DetectorError::transport(self.name(), format!("Failed to read response body: {}", e)))?;

        if status == StatusCode::BAD_REQUEST {
            debug!(detector = %self.name(), "Text rejected by upstream");
            return Ok(EmotionScoreSet::rejected());
        }

        if !status.is_success() {
            let message = if text_body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                text_body
            };
            return Err(DetectorError::request(self.name(), status.as_u16(), message));
        }

        self.parse_scores(&text_body)
    }
}
