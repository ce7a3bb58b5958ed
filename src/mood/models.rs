// Mood data models: the values that flow out of the classifier.
//
// Outcome is the tagged result of one evaluation. Rejections and scorer
// failures are values here, not errors: `Outcome::into_result` renders every
// failure as a neutral MoodResult with its own explanation.

use serde::{Deserialize, Serialize};

/// Polarity at or above this is happy.
pub const HAPPY_THRESHOLD: f64 = 0.2;
/// Polarity at or below this is sad.
pub const SAD_THRESHOLD: f64 = -0.2;
/// Sentences need at least this many whitespace-separated words.
pub const MIN_WORDS: usize = 2;

pub const HAPPY_EXPLANATION: &str = "That sounds happy!";
pub const SAD_EXPLANATION: &str = "That sounds a bit sad or angry.";
pub const NEUTRAL_EXPLANATION: &str = "That sounds neutral.";
pub const TOO_SHORT_EXPLANATION: &str =
    "Please type a full sentence so I can understand the feeling.";
pub const UNSAFE_EXPLANATION: &str =
    "Hmm, I'm not sure about those words. Let's try another sentence!";
pub const TROUBLE_EXPLANATION: &str =
    "I'm having a little trouble understanding. Please try again.";

/// The three moods the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
}

impl Mood {
    /// Bucket a polarity score. Both thresholds are inclusive toward the
    /// non-neutral mood; everything in between (and NaN) is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        match polarity {
            p if p >= HAPPY_THRESHOLD => Mood::Happy,
            p if p <= SAD_THRESHOLD => Mood::Sad,
            _ => Mood::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😀",
            Mood::Sad => "😞",
            Mood::Neutral => "😐",
        }
    }

    /// Explanation shown when this mood came from an actual score.
    pub fn explanation(&self) -> &'static str {
        match self {
            Mood::Happy => HAPPY_EXPLANATION,
            Mood::Sad => SAD_EXPLANATION,
            Mood::Neutral => NEUTRAL_EXPLANATION,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a sentence didn't get a scored mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Empty, or fewer than MIN_WORDS words
    InsufficientInput,
    /// The profanity filter rejected it
    UnsafeContent,
    /// The scorer errored or returned an invalid polarity
    ScoringFailure(String),
}

impl Failure {
    /// Stable identifier used in the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::InsufficientInput => "insufficient_input",
            Failure::UnsafeContent => "unsafe_content",
            Failure::ScoringFailure(_) => "scoring_failure",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Failure::InsufficientInput => TOO_SHORT_EXPLANATION,
            Failure::UnsafeContent => UNSAFE_EXPLANATION,
            Failure::ScoringFailure(_) => TROUBLE_EXPLANATION,
        }
    }
}

/// Tagged result of evaluating one sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored { mood: Mood, polarity: f64 },
    Failed(Failure),
}

impl Outcome {
    /// "scored" or the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Scored { .. } => "scored",
            Outcome::Failed(failure) => failure.kind(),
        }
    }

    /// Render for display. Every failure becomes a neutral result.
    pub fn into_result(self) -> MoodResult {
        match self {
            Outcome::Scored { mood, polarity } => MoodResult {
                mood,
                explanation: mood.explanation().to_string(),
                polarity: Some(polarity),
            },
            Outcome::Failed(failure) => MoodResult {
                mood: Mood::Neutral,
                explanation: failure.explanation().to_string(),
                polarity: None,
            },
        }
    }
}

/// What the user sees: a mood (rendered as an emoji) and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: Mood,
    pub explanation: String,
    /// The scorer's polarity, when scoring actually ran
    pub polarity: Option<f64>,
}

impl MoodResult {
    pub fn emoji(&self) -> &'static str {
        self.mood.emoji()
    }
}
