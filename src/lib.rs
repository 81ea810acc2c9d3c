//! # anagram_db
//!
//! A sorted-letter trie for tile-rack word lookups.
//!
//! Every word is stored at the node reached by spelling its letters in
//! sorted order, so anagrams share a node. Given a rack of letters and blank
//! tiles, the candidate search walks every path the rack can spell and
//! collects the words found along the way.
//!
//! ## Core Concepts
//!
//! - **Trie**: built once from a corpus, read-only afterwards
//! - **Rack**: the letters and wildcards a player holds
//! - **Pipeline**: dedup, rank by length, then pattern and flag filters
//! - **Artifact**: the built trie persisted as one checksummed file
//!
//! ## Example
//!
//! ```ignore
//! use anagram_db::{Corpus, Dictionary, Query, Rack};
//!
//! let dict = Dictionary::initialize(&Corpus::load("words.json")?);
//! dict.save("words.db")?;
//! let result = dict.query(&Query::new(Rack::parse("tca_")?))?;
//! ```

pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod model;
pub mod ops;
pub mod search;
pub mod shell;
pub mod store;
pub mod trie;

mod error;

pub use config::Config;
pub use corpus::Corpus;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use model::{Checksum, Rack, Token};
pub use ops::{FlagFilters, PatternFilter, Query, QueryResult};
pub use search::{CandidateSearch, SearchLimits, SearchStats};
pub use store::ArtifactInfo;
pub use trie::{BuildStats, LetterTrie, TrieBuilder, TrieNode};

/// Artifact format version
pub const VERSION: u32 = 1;

/// Magic bytes for file identification
pub const MAGIC: &[u8; 8] = b"ANAGRAMS";
