//! Detector Error Handling
//!
//! Upstream failures of an emotion detector. Rejected input is not an error:
//! it comes back as a score set without a dominant emotion.

use thiserror::Error;

/// Detector error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectorError {
    /// Upstream answered with an unexpected status
    #[error("[{detector}] Request failed ({status}): {message}")]
    Request {
        detector: String,
        status: u16,
        message: String,
    },

    /// Network failure or timeout before a response arrived
    #[error("[{detector}] Transport error: {message}")]
    Transport { detector: String, message: String },

    /// Response body did not have the expected shape
    #[error("[{detector}] Response parsing failed: {message}")]
    Response { detector: String, message: String },

    /// Client could not be built from configuration
    #[error("[{detector}] Configuration error: {message}")]
    Configuration { detector: String, message: String },
}

impl DetectorError {
    pub fn request(detector: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            detector: detector.into(),
            status,
            message: message.into(),
        }
    }

    pub fn transport(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            detector: detector.into(),
            message: message.into(),
        }
    }

    pub fn response(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Response {
            detector: detector.into(),
            message: message.into(),
        }
    }

    pub fn config(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            detector: detector.into(),
            message: message.into(),
        }
    }

    /// Name of the detector that failed
    pub fn detector(&self) -> &str {
        match self {
            Self::Request { detector, .. }
            | Self::Transport { detector, .. }
            | Self::Response { detector, .. }
            | Self::Configuration { detector, .. } => detector,
        }
    }

    /// Upstream status code, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Detector result type
pub type DetectorResult<T> = Result<T, DetectorError>;
