//! Error types for anagram_db

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for anagram_db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in anagram_db operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load corpus {path}: {reason}")]
    CorpusLoad { path: PathBuf, reason: String },

    #[error("Trie artifact not found at {0} (run `anagram init` to build it)")]
    ArtifactMissing(PathBuf),

    #[error("Corruption detected: {0} (run `anagram init` to rebuild)")]
    Corruption(String),

    #[error("Invalid artifact file: {0}")]
    InvalidFile(String),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Malformed query token {0:?}: expected a single letter or a wildcard")]
    MalformedToken(String),

    #[error("Invalid command: {0} (type `help` for usage)")]
    InvalidCommand(String),

    #[error("Cannot insert an empty word")]
    EmptyWord,

    #[error("Search aborted after visiting {visited} nodes (limit {limit})")]
    SearchLimitExceeded { visited: u64, limit: u64 },

    #[error("Config error: {0}")]
    Config(String),
}
