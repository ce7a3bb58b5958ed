// Profanity filter trait: swap-ready abstraction for the safety gate.
//
// Implementations own their lexicon. `load` must be idempotent: the web
// server calls it once at startup, and the first safety check calls it again
// implicitly, so only the first call may do any work.

/// Trait for deciding whether a sentence contains blocklisted terms.
pub trait ProfanityFilter: Send + Sync {
    /// Build the lexicon if it hasn't been built yet.
    fn load(&self);

    /// True if any blocklisted word or phrase appears in `text`.
    fn contains_blocked_words(&self, text: &str) -> bool;

    /// Number of entries in the loaded lexicon.
    fn blocked_word_count(&self) -> usize;
}
