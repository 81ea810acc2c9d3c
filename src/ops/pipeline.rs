//! Post-processing of raw search output

use super::filter::{apply_filter, apply_flags, FlagFilters, PatternFilter};
use crate::model::Token;
use crate::search::search;
use crate::trie::LetterTrie;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Collapse repeats, keeping the first occurrence of each word
pub fn dedup(mut words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words.retain(|word| seen.insert(word.clone()));
    words
}

/// Longest words first; equal lengths keep their current order
pub fn rank(mut words: Vec<String>) -> Vec<String> {
    words.sort_by_key(|word| Reverse(word.chars().count()));
    words
}

/// Search, deduplicate, rank and filter in one call
///
/// `tokens` may be in any order; they are sorted before searching.
pub fn find_candidates(
    trie: &LetterTrie,
    tokens: &[Token],
    pattern: Option<&PatternFilter>,
    flags: &FlagFilters,
) -> Vec<String> {
    let mut sorted = tokens.to_vec();
    sorted.sort();

    let ranked = rank(dedup(search(trie.root(), &sorted)));
    let filtered = match pattern {
        Some(pattern) => apply_filter(ranked, pattern),
        None => ranked,
    };
    apply_flags(filtered, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rack;
    use crate::trie::build;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_seen() {
        let deduped = dedup(words(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, words(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedup_idempotent() {
        let once = dedup(words(&["dog", "god", "dog", "do", "god"]));
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_longest_first() {
        let ranked = rank(words(&["cat", "cats", "a"]));
        assert_eq!(ranked, words(&["cats", "cat", "a"]));
    }

    #[test]
    fn test_rank_is_stable() {
        let ranked = rank(words(&["tac", "a", "act", "cats", "cat"]));
        assert_eq!(ranked, words(&["cats", "tac", "act", "cat", "a"]));
    }

    #[test]
    fn test_find_candidates_length_flag() {
        let (trie, _) = build(["cat", "cats", "scat"]);
        let rack = Rack::parse("tacs").unwrap();
        let flags = FlagFilters::new().with_length(3);

        let found = find_candidates(&trie, rack.tokens(), None, &flags);
        assert_eq!(found, words(&["cat"]));
    }

    #[test]
    fn test_find_candidates_ranked_and_unique() {
        let (trie, _) = build(["a", "at", "cat", "act"]);
        let rack = Rack::parse("ta_c").unwrap();

        let found = find_candidates(&trie, rack.tokens(), None, &FlagFilters::new());
        let unique: HashSet<_> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].len(), 3);
        assert_eq!(found[1].len(), 3);
        assert_eq!(found[2], "at");
        assert_eq!(found[3], "a");
    }

    #[test]
    fn test_find_candidates_with_pattern() {
        let (trie, _) = build(["cats", "scat", "tacs", "cat"]);
        let rack = Rack::parse("stac").unwrap();
        let pattern = PatternFilter::parse("-s");

        let mut found =
            find_candidates(&trie, rack.tokens(), Some(&pattern), &FlagFilters::new());
        found.sort();
        assert_eq!(found, words(&["cats", "tacs"]));
    }
}
