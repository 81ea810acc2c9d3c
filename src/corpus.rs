//! Word list loading
//!
//! Accepts the formats dictionaries usually ship in:
//! - a JSON object mapping each word to arbitrary metadata (only keys are used)
//! - a JSON array of words
//! - plain text, one word per line, `#` comments allowed

use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Normalized words ready for the trie builder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
    /// Entries dropped during normalization
    skipped: usize,
}

impl Corpus {
    /// Normalize raw entries: trim, lowercase, drop empty or non-alphabetic ones
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Corpus::default();
        for entry in raw {
            match normalize(entry.as_ref()) {
                Some(word) => corpus.words.push(word),
                None => corpus.skipped += 1,
            }
        }
        corpus
    }

    /// Parse a JSON object (word -> metadata) or array of words
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Object(map) => Ok(Self::from_words(map.keys())),
            Value::Array(items) => {
                let mut raw = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(word) => raw.push(word),
                        other => {
                            return Err(Error::CorpusLoad {
                                path: PathBuf::from("<json>"),
                                reason: format!("expected a string entry, found {}", other),
                            })
                        }
                    }
                }
                Ok(Self::from_words(raw))
            }
            other => Err(Error::CorpusLoad {
                path: PathBuf::from("<json>"),
                reason: format!("expected an object or array, found {}", json_kind(&other)),
            }),
        }
    }

    /// Parse one word per line; blank lines and `#` comments are ignored
    pub fn from_text_str(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read(path)?;
        Self::from_json_str(&content).map_err(|e| with_path(e, path))
    }

    pub fn from_text_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self::from_text_str(&read(path)?))
    }

    /// Load by extension: `.json` as JSON, anything else as text
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_path(path)
        } else {
            Self::from_text_path(path)
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::CorpusLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn with_path(err: Error, path: &Path) -> Error {
    let reason = match err {
        Error::CorpusLoad { reason, .. } => reason,
        other => other.to_string(),
    };
    Error::CorpusLoad {
        path: path.to_path_buf(),
        reason,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
