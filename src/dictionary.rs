//! High-level Dictionary API
//!
//! This module provides the main entry point for building, persisting and
//! querying a letter trie.

use crate::corpus::Corpus;
use crate::model::Token;
use crate::ops::{find_candidates, FlagFilters, PatternFilter, Query, QueryResult};
use crate::search::SearchLimits;
use crate::store::{load_trie, save_trie, ArtifactInfo};
use crate::trie::{BuildStats, LetterTrie, TrieBuilder};
use crate::Result;
use std::path::Path;

/// A loaded, read-only word dictionary
///
/// Provides a convenient API for:
/// - Building the trie from a corpus
/// - Saving it to and loading it from an artifact file
/// - Running rack queries with filters and search limits
#[derive(Debug)]
pub struct Dictionary {
    trie: LetterTrie,
    limits: SearchLimits,
    /// Present when the trie was built in this process
    build_stats: Option<BuildStats>,
}

impl Dictionary {
    /// Build the trie from every word of `corpus`
    pub fn initialize(corpus: &Corpus) -> Self {
        let mut builder = TrieBuilder::new();
        builder.extend(corpus.words());
        let build_stats = builder.stats();

        Dictionary {
            trie: builder.finish(),
            limits: SearchLimits::unlimited(),
            build_stats: Some(build_stats),
        }
    }

    /// Wrap an existing trie
    pub fn from_trie(trie: LetterTrie) -> Self {
        Dictionary {
            trie,
            limits: SearchLimits::unlimited(),
            build_stats: None,
        }
    }

    /// Load a trie artifact written by [`Dictionary::save`]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_trie(load_trie(path)?))
    }

    /// Persist the trie, replacing any existing artifact
    pub fn save(&self, path: impl AsRef<Path>) -> Result<ArtifactInfo> {
        save_trie(&self.trie, path)
    }

    /// Set the search ceilings used by [`Dictionary::query`]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn trie(&self) -> &LetterTrie {
        &self.trie
    }

    pub fn build_stats(&self) -> Option<BuildStats> {
        self.build_stats
    }

    /// Run a full query under this dictionary's search limits
    pub fn query(&self, query: &Query) -> Result<QueryResult> {
        query.run(&self.trie, self.limits)
    }

    /// Unbounded search + pipeline over explicit tokens
    pub fn find_candidates(
        &self,
        tokens: &[Token],
        pattern: Option<&PatternFilter>,
        flags: &FlagFilters,
    ) -> Vec<String> {
        find_candidates(&self.trie, tokens, pattern, flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rack;
    use crate::Error;
    use tempfile::tempdir;

    fn corpus() -> Corpus {
        Corpus::from_words(["dog", "god", "do", "go", "cat", "cats", "scat", ""])
    }

    #[test]
    fn test_initialize_reports_stats() {
        let dict = Dictionary::initialize(&corpus());
        let stats = dict.build_stats().unwrap();

        // The empty entry never reaches the builder
        assert_eq!(stats.inserted, 7);
        assert_eq!(stats.rejected, 0);
        assert_eq!(dict.trie().word_count(), 7);
    }

    #[test]
    fn test_query_anagrams() {
        let dict = Dictionary::initialize(&corpus());
        let result = dict
            .query(&Query::new(Rack::parse("ogd").unwrap()))
            .unwrap();

        assert_eq!(result.words.len(), 4);
        let mut longest = result.words[..2].to_vec();
        longest.sort();
        assert_eq!(longest, vec!["dog", "god"]);
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        let dict = Dictionary::initialize(&corpus());
        dict.save(&path).unwrap();

        let reopened = Dictionary::open(&path).unwrap();
        assert_eq!(reopened.trie(), dict.trie());
        assert!(reopened.build_stats().is_none());

        let rack = Rack::parse("stac").unwrap();
        let flags = FlagFilters::new();
        assert_eq!(
            reopened.find_candidates(rack.tokens(), None, &flags),
            dict.find_candidates(rack.tokens(), None, &flags)
        );
    }

    #[test]
    fn test_limits_apply_to_queries() {
        let dict =
            Dictionary::initialize(&corpus()).with_limits(SearchLimits::with_max_visits(3));
        let err = dict
            .query(&Query::new(Rack::parse("____").unwrap()))
            .unwrap_err();
        assert!(matches!(err, Error::SearchLimitExceeded { limit: 3, .. }));
    }
}
