//! Pattern and flag filters applied to ranked candidates

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Marks the open side of a pattern: `-xx` is a suffix, `xx-` a prefix
pub const SEPARATOR: char = '-';

/// A shell pattern such as `-ing`, `re-`, `-ea-` or `cat`
///
/// Every variant rejects the word equal to the pattern text itself, so
/// asking about a word lists the *other* words it leads to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternFilter {
    /// No separator: everything except the text itself
    Bare(String),
    /// `-xx`: words ending with `xx`
    EndsWith(String),
    /// `xx-`: words starting with `xx`
    StartsWith(String),
    /// `-xx-`: words containing `xx`
    Contains(String),
}

impl PatternFilter {
    /// Parse a pattern token; the text is the token with every separator
    /// removed, lowercased like the corpus
    pub fn parse(token: &str) -> Self {
        let text = token
            .chars()
            .filter(|c| *c != SEPARATOR)
            .collect::<String>()
            .to_lowercase();
        let open_start = token.starts_with(SEPARATOR);
        let open_end = token.ends_with(SEPARATOR);

        match (open_start, open_end) {
            (true, true) => PatternFilter::Contains(text),
            (true, false) => PatternFilter::EndsWith(text),
            (false, true) => PatternFilter::StartsWith(text),
            (false, false) => PatternFilter::Bare(text),
        }
    }

    /// The letters the pattern names
    pub fn text(&self) -> &str {
        match self {
            PatternFilter::Bare(text)
            | PatternFilter::EndsWith(text)
            | PatternFilter::StartsWith(text)
            | PatternFilter::Contains(text) => text,
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        if word == self.text() {
            return false;
        }

        match self {
            PatternFilter::Bare(_) => true,
            PatternFilter::EndsWith(text) => word.ends_with(text.as_str()),
            PatternFilter::StartsWith(text) => word.starts_with(text.as_str()),
            PatternFilter::Contains(text) => word.contains(text.as_str()),
        }
    }
}

impl FromStr for PatternFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PatternFilter::parse(s))
    }
}

/// Keep the words matching `filter`, preserving order
pub fn apply_filter(words: Vec<String>, filter: &PatternFilter) -> Vec<String> {
    words.into_iter().filter(|w| filter.matches(w)).collect()
}

/// Independent prefix / suffix / length predicates from the command line
///
/// An unset predicate always passes; a word is kept only if every set
/// predicate holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagFilters {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Exact length in letters
    pub length: Option<usize>,
}

impl FlagFilters {
    pub fn new() -> Self {
        FlagFilters::default()
    }

    /// Build from raw option values, treating empty strings and
    /// non-positive lengths as unset
    pub fn from_raw(prefix: &str, suffix: &str, length: i64) -> Self {
        FlagFilters::new()
            .with_prefix(prefix)
            .with_suffix(suffix)
            .with_length(usize::try_from(length).unwrap_or(0))
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        self.prefix = Some(prefix.to_lowercase()).filter(|p| !p.is_empty());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix: String = suffix.into();
        self.suffix = Some(suffix.to_lowercase()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length).filter(|n| *n > 0);
        self
    }

    /// Check if no predicate is set
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none() && self.length.is_none()
    }

    pub fn matches_prefix(&self, word: &str) -> bool {
        self.prefix
            .as_deref()
            .map_or(true, |prefix| word.starts_with(prefix))
    }

    pub fn matches_suffix(&self, word: &str) -> bool {
        self.suffix
            .as_deref()
            .map_or(true, |suffix| word.ends_with(suffix))
    }

    pub fn matches_length(&self, word: &str) -> bool {
        self.length
            .map_or(true, |length| word.chars().count() == length)
    }

    pub fn matches(&self, word: &str) -> bool {
        self.matches_prefix(word) && self.matches_suffix(word) && self.matches_length(word)
    }
}

/// Keep the words passing every set flag, preserving order
pub fn apply_flags(words: Vec<String>, flags: &FlagFilters) -> Vec<String> {
    if flags.is_empty() {
        return words;
    }
    words.into_iter().filter(|w| flags.matches(w)).collect()
}
