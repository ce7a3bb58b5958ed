// Word-list profanity filter.
//
// Matches whole words (and multi-word phrases) against a blocklist after
// lowercasing and undoing common leetspeak substitutions, so "sh1t", "@ss"
// and "f*ck" are caught while "class" and "scrap" are not. Hyphens and
// underscores separate words, and a word with an apostrophe suffix is also
// checked by its stem ("fuck's").
//
// The lexicon is parsed on first use and cached in a OnceLock: one writer at
// init, any number of readers afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::{debug, info};

use super::traits::ProfanityFilter;

/// The built-in English blocklist, embedded at compile time.
pub const BUILTIN_WORDLIST: &str = include_str!("../../data/profanity_wordlist.txt");

/// Where a filter's word list came from (shown by `textmood status`).
#[derive(Debug, Clone, PartialEq)]
pub enum WordlistOrigin {
    Builtin,
    File(PathBuf),
    Inline,
}

impl fmt::Display for WordlistOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistOrigin::Builtin => write!(f, "built-in"),
            WordlistOrigin::File(path) => write!(f, "{}", path.display()),
            WordlistOrigin::Inline => write!(f, "inline"),
        }
    }
}

/// Profanity filter backed by a plain-text word list.
pub struct WordlistFilter {
    source: String,
    origin: WordlistOrigin,
    extra_words: Vec<String>,
    lexicon: OnceLock<Lexicon>,
}

/// Parsed blocklist. Entries are stored normalised, with phrase tokens
/// joined by a single space.
struct Lexicon {
    entries: HashSet<String>,
    longest_phrase: usize,
}

impl WordlistFilter {
    /// Filter using the built-in English word list.
    pub fn builtin() -> Self {
        Self::from_source(BUILTIN_WORDLIST.to_string(), WordlistOrigin::Builtin)
    }

    /// Filter using a word-list file in place of the built-in list.
    ///
    /// The file is read eagerly so a bad path fails at startup; parsing is
    /// still deferred until the first check.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        Ok(Self::from_source(source, WordlistOrigin::File(path.to_path_buf())))
    }

    /// Filter over an explicit set of words or phrases.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_source(source, WordlistOrigin::Inline)
    }

    fn from_source(source: String, origin: WordlistOrigin) -> Self {
        Self {
            source,
            origin,
            extra_words: Vec::new(),
            lexicon: OnceLock::new(),
        }
    }

    /// Add words on top of the base list. Must be called before the first check.
    pub fn with_extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn origin(&self) -> &WordlistOrigin {
        &self.origin
    }

    /// Replace every blocked word in `text` with four `mask` characters.
    pub fn censor(&self, text: &str, mask: char) -> String {
        let spans = self.blocked_spans(text);
        if spans.is_empty() {
            return text.to_string();
        }

        let replacement: String = std::iter::repeat(mask).take(4).collect();
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, end) in spans {
            out.push_str(&text[cursor..start]);
            out.push_str(&replacement);
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    fn lexicon(&self) -> &Lexicon {
        self.lexicon.get_or_init(|| {
            let lexicon = Lexicon::parse(&self.source, &self.extra_words);
            info!(
                entries = lexicon.entries.len(),
                origin = %self.origin,
                "Loaded profanity word list"
            );
            lexicon
        })
    }

    /// Byte spans of blocked tokens, sorted and non-overlapping.
    fn blocked_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let lexicon = self.lexicon();
        let tokens: Vec<(usize, usize, &str)> = tokenize(text).collect();
        let words: Vec<&str> = tokens.iter().map(|(_, _, t)| *t).collect();
        let mut blocked = vec![false; tokens.len()];

        for start in 0..tokens.len() {
            let max_len = lexicon.longest_phrase.min(tokens.len() - start);
            for len in 1..=max_len {
                if lexicon.matches(&words[start..start + len]) {
                    debug!(start, len, "Blocked token window");
                    blocked[start..start + len].fill(true);
                }
            }
        }

        tokens
            .iter()
            .zip(blocked)
            .filter(|(_, b)| *b)
            .map(|((s, e, _), _)| (*s, *e))
            .collect()
    }
}

impl Default for WordlistFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfanityFilter for WordlistFilter {
    fn load(&self) {
        self.lexicon();
    }

    fn contains_blocked_words(&self, text: &str) -> bool {
        !self.blocked_spans(text).is_empty()
    }

    fn blocked_word_count(&self) -> usize {
        self.lexicon().entries.len()
    }
}

impl Lexicon {
    fn parse(source: &str, extra_words: &[String]) -> Self {
        let mut entries = HashSet::new();
        let mut longest_phrase = 0;

        let lines = source
            .lines()
            .chain(extra_words.iter().map(String::as_str))
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        for line in lines {
            let raw: Vec<&str> = tokenize(line).map(|(_, _, t)| t).collect();
            if raw.is_empty() {
                continue;
            }
            // Entries are stored under both leetspeak readings so "sh1t" in
            // the list behaves the same as "shit".
            for reading in [Reading::Primary, Reading::Alternate] {
                let normalized: Vec<String> = raw.iter().map(|t| normalize(t, reading)).collect();
                entries.insert(normalized.join(" "));
            }
            longest_phrase = longest_phrase.max(raw.len());
        }

        Self {
            entries,
            longest_phrase,
        }
    }

    /// A window matches if any of its word forms is an entry under either
    /// leetspeak reading.
    fn matches(&self, window: &[&str]) -> bool {
        [Reading::Primary, Reading::Alternate]
            .into_iter()
            .any(|reading| candidate_keys(window, reading).iter().any(|key| self.contains(key)))
    }

    /// '*' in a key stands for any vowel.
    fn contains(&self, key: &str) -> bool {
        if key.contains('*') {
            self.entries.iter().any(|entry| wildcard_eq(key, entry))
        } else {
            self.entries.contains(key)
        }
    }
}

/// The two ways ambiguous leetspeak characters are read:
/// '1' as "i" or "l", '@' as "a" or "o".
#[derive(Clone, Copy)]
enum Reading {
    Primary,
    Alternate,
}

const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Characters allowed inside a token but stripped from its ends.
const EDGE_PUNCTUATION: &[char] = &['\'', '\u{2019}', '!'];

/// Letters a '*' can mask, as in "f*ck" or "sh*t".
const MASKED_LETTERS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Hyphens and underscores are not token characters, so "shit-show" and
/// "shit_head" are read as two words.
fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9@$!*'\x{2019}]+").expect("valid word-list token regex")
    })
}

/// Split text into (start, end, token) triples, trimming punctuation that
/// can't be part of a word. A trailing '!' is punctuation; an inner one
/// ("b!tch") is leetspeak.
fn tokenize(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    token_regex().find_iter(text).filter_map(|m| {
        let raw = m.as_str();
        let trimmed_start = raw.trim_start_matches(EDGE_PUNCTUATION);
        let lead = raw.len() - trimmed_start.len();
        let trimmed = trimmed_start.trim_end_matches(EDGE_PUNCTUATION);
        if trimmed.is_empty() {
            return None;
        }
        let start = m.start() + lead;
        Some((start, start + trimmed.len(), trimmed))
    })
}

/// The token itself, plus its stem when it carries an apostrophe suffix
/// ("fuck's" -> "fuck").
fn word_forms(token: &str) -> impl Iterator<Item = &str> {
    let stem = token
        .find(APOSTROPHES)
        .map(|i| &token[..i])
        .filter(|stem| !stem.is_empty());
    std::iter::once(token).chain(stem)
}

/// Every lookup key a window of tokens can produce under one reading.
fn candidate_keys(window: &[&str], reading: Reading) -> Vec<String> {
    window.iter().fold(vec![String::new()], |keys, token| {
        let forms: Vec<String> = word_forms(token).map(|f| normalize(f, reading)).collect();
        keys.iter()
            .flat_map(|key| {
                forms.iter().map(move |form| {
                    if key.is_empty() {
                        form.clone()
                    } else {
                        format!("{key} {form}")
                    }
                })
            })
            .collect()
    })
}

fn wildcard_eq(pattern: &str, entry: &str) -> bool {
    pattern.chars().count() == entry.chars().count()
        && pattern
            .chars()
            .zip(entry.chars())
            .all(|(p, e)| p == e || (p == '*' && MASKED_LETTERS.contains(&e)))
}

fn normalize(token: &str, reading: Reading) -> String {
    token
        .chars()
        .map(|c| match (c.to_ascii_lowercase(), reading) {
            ('@', Reading::Primary) | ('4', _) => 'a',
            ('@', Reading::Alternate) | ('0', _) => 'o',
            ('3', _) => 'e',
            ('!', _) | ('1', Reading::Primary) => 'i',
            ('1', Reading::Alternate) => 'l',
            ('$', _) | ('5', _) => 's',
            ('7', _) => 't',
            ('\u{2019}', _) => '\'',
            (other, _) => other,
        })
        .collect()
}
