//! Emotion Detectors Module
//!
//! External services that classify text into emotion scores:
//! - Watson NLP (`EmotionPredict`)

pub mod traits;
pub mod error;
pub mod watson;

pub use traits::EmotionDetector;
pub use error::{DetectorError, DetectorResult};
pub use watson::WatsonDetector;
