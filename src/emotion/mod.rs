//! Emotion Domain Module
//!
//! Value types for one analysis round-trip:
//! - The five tracked emotions and their wire names
//! - Per-request score sets returned by a detector
//! - The plain-text reply shown to the user

pub mod scores;
pub mod reply;

pub use scores::{Emotion, EmotionScoreSet};
pub use reply::{format_score, AnalysisReply, INVALID_TEXT_MESSAGE, RESPONSE_PREFIX};
