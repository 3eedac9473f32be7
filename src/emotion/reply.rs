//! Analysis Reply
//!
//! Renders a detector result into the plain-text message returned to users

use std::fmt;

use crate::emotion::scores::EmotionScoreSet;

/// Returned verbatim when the detector finds no dominant emotion
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!.";

/// Leading text of every successful reply
pub const RESPONSE_PREFIX: &str = "For the given statement the system response is";

/// Outcome of analyzing one text
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReply {
    /// Detector accepted the text
    Detected(EmotionScoreSet),
    /// Detector rejected the text (empty or unclassifiable)
    InvalidText,
}

impl AnalysisReply {
    /// Classify a score set. Scores of a rejected set are dropped here.
    pub fn from_scores(scores: EmotionScoreSet) -> Self {
        if scores.is_accepted() {
            Self::Detected(scores)
        } else {
            Self::InvalidText
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidText)
    }
}

impl From<EmotionScoreSet> for AnalysisReply {
    fn from(scores: EmotionScoreSet) -> Self {
        Self::from_scores(scores)
    }
}

impl fmt::Display for AnalysisReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = match self {
            Self::InvalidText => return f.write_str(INVALID_TEXT_MESSAGE),
            Self::Detected(scores) => scores,
        };
        // A detected set without a dominant emotion still counts as rejected.
        let Some(dominant) = scores.dominant_emotion else {
            return f.write_str(INVALID_TEXT_MESSAGE);
        };

        write!(f, "{} ", RESPONSE_PREFIX)?;
        for (emotion, score) in scores.iter() {
            write!(f, "'{}': {}, ", emotion, format_score(score))?;
        }
        write!(f, "'dominant_emotion': {}", dominant)
    }
}

/// Format a score the way the upstream tooling prints floats.
///
/// Integral values keep a trailing `.0`; values below `1e-4` or at least
/// `1e16` in magnitude use a signed two-digit exponent (`2.6e-05`, `1e+16`).
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::scores::Emotion;

    #[test]
    fn test_render_detected() {
        let scores = EmotionScoreSet::from_scores(0.0, 0.0, 0.0, 0.95, 0.02);
        let reply = AnalysisReply::from_scores(scores);
        assert_eq!(
            reply.to_string(),
            "For the given statement the system response is 'anger': 0.0, 'disgust': 0.0, \
             'fear': 0.0, 'joy': 0.95, 'sadness': 0.02, 'dominant_emotion': joy"
        );
    }

    #[test]
    fn test_render_rejected_hides_scores() {
        let mut scores = EmotionScoreSet::from_scores(0.4, 0.1, 0.1, 0.1, 0.1);
        scores.dominant_emotion = None;
        let reply = AnalysisReply::from(scores);
        assert!(reply.is_invalid());
        assert_eq!(reply.to_string(), INVALID_TEXT_MESSAGE);
    }

    #[test]
    fn test_render_uses_detector_dominant() {
        let mut scores = EmotionScoreSet::from_scores(0.4, 0.1, 0.1, 0.1, 0.1);
        scores.dominant_emotion = Some(Emotion::Sadness);
        assert!(AnalysisReply::from(scores).to_string().ends_with("'dominant_emotion': sadness"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(-0.0), "-0.0");
        assert_eq!(format_score(0.95), "0.95");
        assert_eq!(format_score(0.006274985), "0.006274985");
        assert_eq!(format_score(0.0001), "0.0001");
        assert_eq!(format_score(2.6e-5), "2.6e-05");
        assert_eq!(format_score(1e16), "1e+16");
        assert_eq!(format_score(f64::NAN), "nan");
    }
}
