//! Server Types
//!
//! Request and response shapes used by the routes

use serde::{Deserialize, Serialize};

/// Name of the query parameter carrying the text
pub const TEXT_PARAM: &str = "textToAnalyze";

/// Query string of `/emotionDetector`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionQuery {
    /// Text to analyze. A missing parameter is analyzed as empty text.
    #[serde(rename = "textToAnalyze", default)]
    pub text_to_analyze: Option<String>,
}

impl EmotionQuery {
    /// Build from decoded query pairs. The first `textToAnalyze` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let text_to_analyze = pairs
            .into_iter()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value);
        Self { text_to_analyze }
    }

    pub fn text(&self) -> &str {
        self.text_to_analyze.as_deref().unwrap_or_default()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the upstream detector
    pub detector: String,
    /// Uptime in seconds
    pub uptime: u64,
}
