//! Emotion Scores
//!
//! The five-score record produced by a detector for a single text

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracked emotion categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All emotions in reporting order
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

/// Scores for one analyzed text.
///
/// `dominant_emotion` is `Some` only when the detector accepted the text.
/// A set without a dominant emotion carries no meaningful scores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScoreSet {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
    #[serde(default)]
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionScoreSet {
    /// Build an accepted score set, picking the dominant emotion from the scores.
    pub fn from_scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Self {
        let mut set = Self {
            anger,
            disgust,
            fear,
            joy,
            sadness,
            dominant_emotion: None,
        };
        set.dominant_emotion = Some(set.strongest());
        set
    }

    /// Score set for text the detector refused to classify.
    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// `(emotion, score)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |emotion| (emotion, self.score(emotion)))
    }

    pub fn is_accepted(&self) -> bool {
        self.dominant_emotion.is_some()
    }

    /// Highest-scoring emotion. Ties go to the earliest in reporting order.
    fn strongest(&self) -> Emotion {
        let mut best = Emotion::Anger;
        let mut best_score = self.anger;
        for (emotion, score) in self.iter().skip(1) {
            if score > best_score {
                best = emotion;
                best_score = score;
            }
        }
        best
    }
}
