// The mood classifier.
//
// Rules, first match wins:
//   1. fewer than MIN_WORDS words       -> InsufficientInput
//   2. profanity filter hit             -> UnsafeContent
//   3. scorer error or invalid polarity -> ScoringFailure
//   4. otherwise                        -> Mood::from_polarity(score)
//
// Failures are logged and returned as values; nothing here propagates an
// error to the caller.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use super::models::{Failure, Mood, MoodResult, Outcome, MIN_WORDS};
use crate::safety::traits::ProfanityFilter;
use crate::sentiment::traits::{SentimentScorer, MAX_POLARITY, MIN_POLARITY};

/// Turns a sentence into a mood. Cheap to share behind an `Arc`.
pub struct MoodClassifier {
    filter: Arc<dyn ProfanityFilter>,
    scorer: Arc<dyn SentimentScorer>,
}

impl MoodClassifier {
    pub fn new(filter: Arc<dyn ProfanityFilter>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { filter, scorer }
    }

    pub fn filter(&self) -> &dyn ProfanityFilter {
        self.filter.as_ref()
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    /// Evaluate a sentence, keeping the reason for any neutral fallback.
    pub async fn evaluate(&self, sentence: &str) -> Outcome {
        let words = word_count(sentence);
        if words < MIN_WORDS {
            debug!(words, "Sentence too short to classify");
            return Outcome::Failed(Failure::InsufficientInput);
        }

        if self.filter.contains_blocked_words(sentence) {
            info!(words, "Sentence rejected by profanity filter");
            return Outcome::Failed(Failure::UnsafeContent);
        }

        match self.scorer.polarity(sentence).await.and_then(validate_polarity) {
            Ok(polarity) => {
                let outcome = Outcome::Scored {
                    mood: Mood::from_polarity(polarity),
                    polarity,
                };
                debug!(polarity, kind = outcome.kind(), "Classified sentence");
                outcome
            }
            Err(e) => {
                warn!(error = %e, scorer = self.scorer.name(), "Sentiment scoring failed");
                Outcome::Failed(Failure::ScoringFailure(e.to_string()))
            }
        }
    }

    /// Classify a sentence for display. Failures come back as neutral results.
    pub async fn classify(&self, sentence: &str) -> MoodResult {
        self.evaluate(sentence).await.into_result()
    }
}

/// Number of whitespace-separated words.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Reject scores a well-behaved scorer can't produce.
fn validate_polarity(polarity: f64) -> Result<f64> {
    if !polarity.is_finite() || !(MIN_POLARITY..=MAX_POLARITY).contains(&polarity) {
        anyhow::bail!("Scorer returned polarity {polarity} outside [{MIN_POLARITY}, {MAX_POLARITY}]");
    }
    Ok(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("  hi\tthere\n "), 2);
    }

    #[test]
    fn test_validate_polarity_bounds() {
        assert!(validate_polarity(1.0).is_ok());
        assert!(validate_polarity(-1.0).is_ok());
        assert!(validate_polarity(1.0001).is_err());
        assert!(validate_polarity(f64::NAN).is_err());
        assert!(validate_polarity(f64::NEG_INFINITY).is_err());
    }
}
