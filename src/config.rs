use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::mood::classifier::MoodClassifier;
use crate::safety::wordlist::WordlistFilter;
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::remote::RemoteScorer;
use crate::sentiment::traits::SentimentScorer;

/// Default address for `textmood serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Which sentiment scoring backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum ScorerBackend {
    /// Embedded word lexicon (default), no network needed
    Lexicon,
    /// HTTP sentiment service at TEXTMOOD_SCORER_URL
    Remote,
}

/// Central configuration loaded from environment variables.
///
/// Nothing is required: with an empty environment the detector runs on its
/// built-in word list and lexicon. The .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Replacement profanity word list (None = built-in list)
    pub wordlist_path: Option<PathBuf>,
    /// Extra blocked words layered on top of the word list
    pub extra_blocked_words: Vec<String>,
    pub scorer_backend: ScorerBackend,
    /// Replacement sentiment lexicon (None = built-in lexicon)
    pub lexicon_path: Option<PathBuf>,
    /// Endpoint for the remote scorer
    pub scorer_url: String,
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let scorer_backend = match env::var("TEXTMOOD_SCORER").as_deref() {
            Ok("remote") => ScorerBackend::Remote,
            // "lexicon" or unset both default to the lexicon
            Ok("lexicon") | Err(_) => ScorerBackend::Lexicon,
            Ok(other) => anyhow::bail!(
                "Unknown TEXTMOOD_SCORER value '{other}'. Use 'lexicon' or 'remote'."
            ),
        };

        // An explicit path wins; otherwise use the per-user list if one exists.
        let wordlist_path = env::var("TEXTMOOD_WORDLIST_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| Some(default_wordlist_path()).filter(|p| p.exists()));

        let port = match env::var("TEXTMOOD_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("TEXTMOOD_PORT must be a port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            wordlist_path,
            extra_blocked_words: parse_word_list(
                &env::var("TEXTMOOD_EXTRA_BLOCKED_WORDS").unwrap_or_default(),
            ),
            scorer_backend,
            lexicon_path: env::var("TEXTMOOD_LEXICON_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            scorer_url: env::var("TEXTMOOD_SCORER_URL").unwrap_or_default(),
            bind: env::var("TEXTMOOD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port,
        })
    }

    /// Validate that the chosen scorer backend has what it needs.
    pub fn require_scorer(&self) -> Result<()> {
        match self.scorer_backend {
            ScorerBackend::Lexicon => Ok(()),
            ScorerBackend::Remote => {
                if self.scorer_url.is_empty() {
                    anyhow::bail!(
                        "TEXTMOOD_SCORER=remote but TEXTMOOD_SCORER_URL is not set.\n\
                         Add it to your .env file, or unset TEXTMOOD_SCORER to use the built-in lexicon."
                    );
                }
                Ok(())
            }
        }
    }

    /// Build the profanity filter described by this config.
    pub fn build_filter(&self) -> Result<WordlistFilter> {
        let filter = match &self.wordlist_path {
            Some(path) => {
                info!(path = %path.display(), "Using custom profanity word list");
                WordlistFilter::from_path(path)?
            }
            None => WordlistFilter::builtin(),
        };
        Ok(filter.with_extra_words(self.extra_blocked_words.iter().cloned()))
    }

    /// Build the lexicon scorer, from the configured file or the built-in data.
    pub fn build_lexicon(&self) -> Result<LexiconScorer> {
        match &self.lexicon_path {
            Some(path) => {
                info!(path = %path.display(), "Using custom sentiment lexicon");
                LexiconScorer::from_path(path)
            }
            None => Ok(LexiconScorer::builtin()),
        }
    }

    /// Build the sentiment scorer for the configured backend.
    pub fn build_scorer(&self) -> Result<Arc<dyn SentimentScorer>> {
        self.require_scorer()?;
        match self.scorer_backend {
            ScorerBackend::Lexicon => {
                info!("Using local lexicon sentiment scorer");
                Ok(Arc::new(self.build_lexicon()?))
            }
            ScorerBackend::Remote => {
                info!(endpoint = %self.scorer_url, "Using remote sentiment scorer");
                Ok(Arc::new(RemoteScorer::new(self.scorer_url.clone())))
            }
        }
    }

    /// Wire up a classifier from this config.
    pub fn build_classifier(&self) -> Result<MoodClassifier> {
        let filter = Arc::new(self.build_filter()?);
        let scorer = self.build_scorer()?;
        Ok(MoodClassifier::new(filter, scorer))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist_path: None,
            extra_blocked_words: Vec::new(),
            scorer_backend: ScorerBackend::Lexicon,
            lexicon_path: None,
            scorer_url: String::new(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Per-user word list location: ~/.config/textmood/wordlist.txt on Linux.
pub fn default_wordlist_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("textmood")
        .join("wordlist.txt")
}

/// Split a comma-separated list, dropping blanks.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
