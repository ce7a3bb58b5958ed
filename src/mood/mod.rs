// Mood classification: length check, safety gate, polarity buckets.
//
// MoodClassifier composes a ProfanityFilter and a SentimentScorer. Both are
// injected at construction, so the CLI, the web server and the tests can
// each pick their own implementations.

pub mod classifier;
pub mod models;
