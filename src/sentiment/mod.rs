// Sentiment scoring: trait-based abstraction for swappable polarity providers.
//
// The SentimentScorer trait defines the interface. LexiconScorer is the local
// default (averaged word scores from an embedded lexicon); RemoteScorer asks an
// HTTP service instead. The mood classifier only ever sees the trait.

pub mod traits;
pub mod lexicon;
pub mod remote;
