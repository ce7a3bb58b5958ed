// System status display: which word list, lexicon and scorer are in use.

use colored::Colorize;

use crate::config::{Config, ScorerBackend};
use crate::mood::classifier::MoodClassifier;
use crate::mood::models::{HAPPY_THRESHOLD, MIN_WORDS, SAD_THRESHOLD};

/// Display system status to the terminal.
///
/// `lexicon_entries` is None when the scorer isn't lexicon-backed.
pub fn show(config: &Config, classifier: &MoodClassifier, lexicon_entries: Option<usize>) {
    println!("{}", "=== textmood status ===".bold());

    let wordlist = match &config.wordlist_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    println!(
        "Profanity word list: {} ({} entries)",
        wordlist,
        classifier.filter().blocked_word_count()
    );
    if !config.extra_blocked_words.is_empty() {
        println!(
            "  Extra blocked words: {}",
            config.extra_blocked_words.len()
        );
    }

    match config.scorer_backend {
        ScorerBackend::Lexicon => {
            let source = match &config.lexicon_path {
                Some(path) => path.display().to_string(),
                None => "built-in".to_string(),
            };
            let entries = lexicon_entries
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string());
            println!("Sentiment scorer: lexicon ({source}, {entries} entries)");
        }
        ScorerBackend::Remote => {
            println!("Sentiment scorer: remote ({})", config.scorer_url);
        }
    }

    println!(
        "Thresholds: happy >= {HAPPY_THRESHOLD}, sad <= {SAD_THRESHOLD}, minimum {MIN_WORDS} words"
    );
    println!("Web UI address: http://{}:{}", config.bind, config.port);
}
