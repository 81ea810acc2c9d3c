//! A complete rack lookup: tiles, board letters and filters

use super::filter::{apply_filter, apply_flags, FlagFilters, PatternFilter};
use super::pipeline::{dedup, rank};
use crate::model::{Rack, Token};
use crate::search::{CandidateSearch, SearchLimits, SearchStats};
use crate::trie::LetterTrie;
use crate::Result;
use serde::Serialize;

/// What the player holds and what the result must look like
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub rack: Rack,
    pub pattern: Option<PatternFilter>,
    pub flags: FlagFilters,
    /// Cap on the number of words returned
    pub limit: Option<usize>,
}

/// Ranked words plus diagnostics
#[derive(Clone, Debug, Default, Serialize)]
pub struct QueryResult {
    pub words: Vec<String>,
    /// Matches before `limit` was applied
    pub total: usize,
    /// Candidates produced by the search, repeats included
    pub raw_count: usize,
    pub stats: SearchStats,
}

impl Query {
    pub fn new(rack: Rack) -> Self {
        Query {
            rack,
            ..Query::default()
        }
    }

    pub fn with_pattern(mut self, pattern: PatternFilter) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_flags(mut self, flags: FlagFilters) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rack tokens plus the letters already on the board, in search order
    ///
    /// Letters named by the pattern or by the prefix/suffix flags are part of
    /// the word being looked for, so they count as available even though the
    /// player does not hold them.
    pub fn available_tokens(&self) -> Result<Vec<Token>> {
        let mut rack = self.rack.clone();
        if let Some(pattern) = &self.pattern {
            rack.push_str(pattern.text())?;
        }
        if let Some(prefix) = &self.flags.prefix {
            rack.push_str(prefix)?;
        }
        if let Some(suffix) = &self.flags.suffix {
            rack.push_str(suffix)?;
        }
        Ok(rack.sorted())
    }

    /// Run against `trie`: search, dedup, rank, pattern, flags, limit
    pub fn run(&self, trie: &LetterTrie, limits: SearchLimits) -> Result<QueryResult> {
        let tokens = self.available_tokens()?;
        let outcome = CandidateSearch::new(trie)
            .with_limits(limits)
            .search(&tokens)?;
        let raw_count = outcome.candidates.len();

        let mut words = rank(dedup(outcome.candidates));
        if let Some(pattern) = &self.pattern {
            words = apply_filter(words, pattern);
        }
        words = apply_flags(words, &self.flags);

        let total = words.len();
        if let Some(limit) = self.limit {
            words.truncate(limit);
        }

        Ok(QueryResult {
            words,
            total,
            raw_count,
            stats: outcome.stats,
        })
    }
}
