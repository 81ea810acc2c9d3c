//! Wildcard-aware subset search over a letter trie

use crate::model::Token;
use crate::trie::{LetterTrie, TrieNode};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-query diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of trie nodes entered, counting revisits
    pub nodes_visited: u64,
}

/// Ceilings that stop a runaway search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of node visits before the search is aborted
    #[serde(default)]
    pub max_visits: Option<u64>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        SearchLimits::default()
    }

    pub fn with_max_visits(max_visits: u64) -> Self {
        SearchLimits {
            max_visits: Some(max_visits),
        }
    }
}

/// Raw search output, before deduplication
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    /// Every word reached, with repeats, in visit order
    pub candidates: Vec<String>,
    pub stats: SearchStats,
}

/// Enumerates every word that can be spelled from a subset of the tokens
///
/// The search tries consuming each remaining token at every step. Because
/// trie paths only ever ascend, most of those orderings stop at the first
/// missing child; the ones that survive are exactly the subsets whose sorted
/// letters form a trie path. Tokens are expected in rack order (see
/// [`crate::model::Rack::sorted`]) so visit order and counts are stable.
///
/// The same word is usually reached through more than one branch. Results
/// are not deduplicated here.
pub struct CandidateSearch<'a> {
    start: &'a TrieNode,
    limits: SearchLimits,
}

impl<'a> CandidateSearch<'a> {
    /// Search from the root of `trie`
    pub fn new(trie: &'a LetterTrie) -> Self {
        Self::from_node(trie.root())
    }

    /// Search from an arbitrary node
    pub fn from_node(start: &'a TrieNode) -> Self {
        CandidateSearch {
            start,
            limits: SearchLimits::unlimited(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the search with pre-sorted tokens
    pub fn search(&self, available: &[Token]) -> Result<SearchOutcome> {
        let mut walk = Walk {
            limits: self.limits,
            stats: SearchStats::default(),
            found: Vec::new(),
        };

        if !walk.visit(self.start, available) {
            return Err(Error::SearchLimitExceeded {
                visited: walk.stats.nodes_visited,
                limit: self.limits.max_visits.unwrap_or_default(),
            });
        }

        Ok(SearchOutcome {
            candidates: walk.found.into_iter().map(str::to_string).collect(),
            stats: walk.stats,
        })
    }
}

/// Unbounded search from `node`, returning the raw candidates
pub fn search(node: &TrieNode, available: &[Token]) -> Vec<String> {
    let mut walk = Walk {
        limits: SearchLimits::unlimited(),
        stats: SearchStats::default(),
        found: Vec::new(),
    };
    walk.visit(node, available);
    walk.found.into_iter().map(str::to_string).collect()
}

/// State threaded through one recursive search
struct Walk<'a> {
    limits: SearchLimits,
    stats: SearchStats,
    found: Vec<&'a str>,
}

impl<'a> Walk<'a> {
    /// Returns false once the visit ceiling is exceeded
    fn visit(&mut self, node: &'a TrieNode, available: &[Token]) -> bool {
        self.stats.nodes_visited += 1;
        if let Some(limit) = self.limits.max_visits {
            if self.stats.nodes_visited > limit {
                return false;
            }
        }

        // Using none of the remaining tokens is always allowed
        self.found.extend(node.words().iter().map(String::as_str));

        for (idx, token) in available.iter().enumerate() {
            if token.is_wildcard() && !node.is_leaf() {
                let rest = without(available, idx);
                for (_, child) in node.children() {
                    if !self.visit(child, &rest) {
                        return false;
                    }
                }
            }

            if let Some(child) = token.letter().and_then(|letter| node.child(letter)) {
                if !self.visit(child, &without(available, idx)) {
                    return false;
                }
            }
        }

        true
    }
}

/// Copy of `tokens` with the element at `idx` removed, order preserved
fn without(tokens: &[Token], idx: usize) -> Vec<Token> {
    let mut rest = Vec::with_capacity(tokens.len().saturating_sub(1));
    rest.extend_from_slice(&tokens[..idx]);
    rest.extend_from_slice(&tokens[idx + 1..]);
    rest
}
