//! # Emotion Detector
//!
//! A small web service that forwards text to an external emotion-analysis
//! API and reports the anger, disgust, fear, joy and sadness scores together
//! with the dominant emotion.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use emotion_detector::server::{EmotionServer, ServerConfig};
//!
//! let server = EmotionServer::new(ServerConfig::default())?;
//! server.run().await?;
//! ```
//!
//! ## Analyzing Text Directly
//!
//! ```rust,ignore
//! use emotion_detector::server::{DetectorConfig, WatsonDetector};
//! use emotion_detector::server::routes::emotion::analyze_text;
//!
//! let detector = WatsonDetector::new(DetectorConfig::default())?;
//! let reply = analyze_text(&detector, "I am happy").await?;
//! println!("{}", reply);
//! ```
//!
//! ## Routes
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /emotionDetector?textToAnalyze=...` | Plain-text scores or `Invalid text! Please try again!.` |
//! | `GET /` | Index page |
//! | `GET /health` | JSON health report |

pub mod emotion;
pub mod server;

pub use emotion::{AnalysisReply, Emotion, EmotionScoreSet, INVALID_TEXT_MESSAGE};
pub use server::{
    DetectorConfig, DetectorError, DetectorResult, EmotionDetector, EmotionServer,
    ServerConfig, WatsonDetector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
