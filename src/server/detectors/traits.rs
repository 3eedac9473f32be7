//! Emotion Detector Traits
//!
//! Defines the boundary to external emotion-classification services

use async_trait::async_trait;

use crate::emotion::EmotionScoreSet;
use crate::server::detectors::error::DetectorResult;

/// An external emotion classifier.
///
/// Implementations pass the text through unmodified. Text the service refuses
/// to classify yields `Ok` with no dominant emotion; every other failure is an
/// `Err`.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    /// Detector name, used in logs and errors
    fn name(&self) -> &str;

    /// Classify a text
    async fn detect(&self, text: &str) -> DetectorResult<EmotionScoreSet>;
}
