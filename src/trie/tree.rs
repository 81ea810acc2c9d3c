//! Read-only letter trie

use super::node::letter_key;
use super::TrieNode;
use serde::{Deserialize, Serialize};

/// A finished letter trie
///
/// Owns the root node outright. There are no mutating methods, so a
/// `&LetterTrie` can be shared between threads running independent queries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTrie {
    root: TrieNode,
}

impl LetterTrie {
    /// Wrap a root built by [`super::TrieBuilder`] or decoded from an artifact
    pub(crate) fn from_root(root: TrieNode) -> Self {
        LetterTrie { root }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follow an explicit letter path from the root
    pub fn walk(&self, path: &[char]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(&self.root, |node, letter| node.child(*letter))
    }

    /// Find the node holding the anagrams of `word`
    pub fn lookup(&self, word: &str) -> Option<&TrieNode> {
        self.walk(&letter_key(word))
    }

    /// All stored words that use exactly the letters of `word`
    pub fn anagrams(&self, word: &str) -> &[String] {
        self.lookup(word).map(TrieNode::words).unwrap_or(&[])
    }

    /// Check if `word` itself is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.anagrams(word).iter().any(|w| w == word)
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn word_count(&self) -> usize {
        self.root.word_count()
    }

    /// Letters in the longest stored word
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::build;

    #[test]
    fn test_trie_lookup() {
        let (trie, _) = build(["listen", "silent", "enlist", "tinsel"]);

        let mut anagrams = trie.anagrams("inlets").to_vec();
        anagrams.sort();
        assert_eq!(anagrams, vec!["enlist", "listen", "silent", "tinsel"]);
        assert!(trie.anagrams("list").is_empty());
    }

    #[test]
    fn test_trie_contains() {
        let (trie, _) = build(["dog", "god"]);

        assert!(trie.contains("dog"));
        assert!(trie.contains("god"));
        assert!(!trie.contains("odg"));
        assert!(!trie.contains("do"));
    }

    #[test]
    fn test_trie_walk() {
        let (trie, _) = build(["at", "tea"]);

        assert_eq!(trie.walk(&['a', 't']).unwrap().words(), ["at"]);
        assert_eq!(trie.walk(&['a', 'e', 't']).unwrap().words(), ["tea"]);
        assert!(trie.walk(&['t', 'a']).is_none());
        assert_eq!(trie.walk(&[]).unwrap(), trie.root());
    }

    #[test]
    fn test_trie_stats() {
        let (trie, _) = build(["a", "at", "tea"]);

        // root, a, a-t, a-e, a-e-t
        assert_eq!(trie.node_count(), 5);
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.height(), 3);
        assert!(!trie.is_empty());
        assert!(build(Vec::<String>::new()).0.is_empty());
    }
}
