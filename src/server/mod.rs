//! Emotion Server Module
//!
//! HTTP front end for an external emotion-analysis service:
//! - `/emotionDetector` plain-text analysis endpoint
//! - Static index page with an analysis form
//! - Pluggable upstream detectors (Watson NLP)
//! - YAML configuration

pub mod server_core;
pub mod config;
pub mod routes;
pub mod types;
pub mod detectors;

pub use server_core::{create_router, EmotionServer, ServerState};
pub use config::{ConfigError, DetectorConfig, LoggingConfig, ServerConfig};
pub use types::*;
pub use detectors::{DetectorError, DetectorResult, EmotionDetector, WatsonDetector};
