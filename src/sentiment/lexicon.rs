// Lexicon-based polarity scorer.
//
// Every known word in the sentence contributes its lexicon polarity, adjusted
// by the words in front of it:
//   - modifiers ("very", "slightly") multiply the next scored word
//   - negators ("not", "never", "...n't") flip it at half strength
//   - each "!" right after a scored word strengthens it by 10%
// The sentence polarity is the mean of those contributions, clamped to
// [-1.0, 1.0]. Sentences with no known words score 0.0.
//
// Modifier and negation state is cleared at clause punctuation, so the "not"
// in "not here, but happy" doesn't reach "happy".
//
// Typographic apostrophes (U+2019) are read as plain ones, so "don’t" negates
// like "don't".

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::traits::{SentimentScorer, MAX_POLARITY, MIN_POLARITY};

/// The built-in lexicon, embedded at compile time.
pub const BUILTIN_LEXICON: &str = include_str!("../../data/sentiment_lexicon.tsv");

/// Multiplier applied to a word preceded by a negator.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Multiplier applied per exclamation mark directly after a scored word.
pub const EXCLAMATION_BOOST: f64 = 1.1;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "cannot", "without",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Entry {
    /// A word with its own polarity.
    Word(f64),
    /// An intensifier or diminisher; multiplies the next scored word.
    Modifier(f64),
}

/// One scored word and how its context changed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub word: String,
    /// Polarity straight from the lexicon
    pub base_polarity: f64,
    /// Polarity after modifiers, negation and exclamation marks
    pub polarity: f64,
    /// Product of the modifiers in front of the word (1.0 if none)
    pub modifier: f64,
    pub negated: bool,
}

/// Scores sentences by averaging word polarities from a lexicon.
pub struct LexiconScorer {
    entries: HashMap<String, Entry>,
}

impl LexiconScorer {
    /// Scorer over the built-in lexicon.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_LEXICON)
    }

    /// Scorer over a user-supplied lexicon file (same TSV format as the built-in one).
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sentiment lexicon {}", path.display()))?;
        let scorer = Self::parse(&source);
        if scorer.is_empty() {
            anyhow::bail!(
                "Sentiment lexicon {} has no usable entries.\n\
                 Expected lines of the form: word<TAB>polarity[<TAB>intensity]",
                path.display()
            );
        }
        Ok(scorer)
    }

    /// Parse `word<TAB>polarity[<TAB>intensity]` lines.
    ///
    /// Lines with a third column are modifiers. Malformed lines and
    /// out-of-range polarities are skipped with a warning.
    pub fn parse(source: &str) -> Self {
        let mut entries = HashMap::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let entry = match fields.as_slice() {
                [word, polarity] => parse_number(polarity)
                    .filter(|p| (MIN_POLARITY..=MAX_POLARITY).contains(p))
                    .map(|p| (*word, Entry::Word(p))),
                [word, _polarity, intensity] => {
                    parse_number(intensity).map(|i| (*word, Entry::Modifier(i)))
                }
                _ => None,
            };

            match entry {
                Some((word, entry)) if !word.is_empty() => {
                    entries.insert(lexicon_key(word), entry);
                }
                _ => warn!(line = idx + 1, content = line, "Skipping malformed lexicon line"),
            }
        }

        Self { entries }
    }

    /// Number of words (including modifiers) in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-word breakdown of how a sentence is scored.
    pub fn assess(&self, text: &str) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;
        let mut last_scored = false;

        for m in token_regex().find_iter(text) {
            let token = m.as_str();
            match token {
                "!" => {
                    if last_scored {
                        if let Some(last) = assessments.last_mut() {
                            last.polarity =
                                (last.polarity * EXCLAMATION_BOOST).clamp(MIN_POLARITY, MAX_POLARITY);
                        }
                    }
                    continue;
                }
                "." | "," | ";" | "?" => {
                    modifier = None;
                    negated = false;
                    last_scored = false;
                    continue;
                }
                _ => {}
            }

            let lower = token.to_lowercase().replace('\u{2019}', "'");
            if NEGATORS.contains(&lower.as_str()) || lower.ends_with("n't") {
                negated = true;
                last_scored = false;
                continue;
            }

            match self.lookup(token, &lower) {
                Some(Entry::Modifier(factor)) => {
                    modifier = Some(modifier.unwrap_or(1.0) * factor);
                    last_scored = false;
                }
                Some(Entry::Word(base)) => {
                    let factor = modifier.take().unwrap_or(1.0);
                    let mut polarity = base * factor;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    assessments.push(Assessment {
                        word: token.to_string(),
                        base_polarity: base,
                        polarity: polarity.clamp(MIN_POLARITY, MAX_POLARITY),
                        modifier: factor,
                        negated,
                    });
                    negated = false;
                    last_scored = true;
                }
                None => last_scored = false,
            }
        }

        assessments
    }

    /// Mean polarity of the assessed words, or 0.0 if none were found.
    pub fn score(&self, text: &str) -> f64 {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return 0.0;
        }
        let sum: f64 = assessments.iter().map(|a| a.polarity).sum();
        (sum / assessments.len() as f64).clamp(MIN_POLARITY, MAX_POLARITY)
    }

    /// Emoticons are case-sensitive (":D" vs ":d"); words are not.
    fn lookup(&self, token: &str, lower: &str) -> Option<Entry> {
        self.entries
            .get(token)
            .or_else(|| self.entries.get(lower))
            .copied()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn polarity(&self, text: &str) -> Result<f64> {
        let polarity = self.score(text);
        debug!(polarity, "Lexicon polarity");
        Ok(polarity)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Alphabetic entries are stored lowercase; emoticons keep their case.
fn lexicon_key(word: &str) -> String {
    if word.chars().all(|c| c.is_alphabetic() || c == '\'') {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"[:;]'?-?[()D]|<3|D:|[A-Za-z]+(?:['\x{2019}][A-Za-z]+)*|[!.,;?]")
            .expect("valid sentiment token regex")
    })
}
