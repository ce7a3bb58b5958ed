// Sentiment scorer trait: the swap-ready abstraction.

use anyhow::Result;
use async_trait::async_trait;

/// Lowest polarity a scorer may report.
pub const MIN_POLARITY: f64 = -1.0;
/// Highest polarity a scorer may report.
pub const MAX_POLARITY: f64 = 1.0;

/// Trait for scoring the polarity of a sentence. Async because remote
/// providers need an HTTP round-trip; local scorers simply return.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Polarity from -1.0 (very negative) to 1.0 (very positive).
    async fn polarity(&self, text: &str) -> Result<f64>;

    /// Short backend name for logs and `textmood status`.
    fn name(&self) -> &'static str;
}
