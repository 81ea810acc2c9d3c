//! Trie node types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the letter trie
///
/// The path from the root to a node spells a multiset of letters in ascending
/// order. Every word whose sorted letters equal that path is stored here, so
/// anagrams share a node:
/// - "dog" and "god" both live at `d -> g -> o`
/// - the root (empty path) never holds a word
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    /// Words terminating at this node, in insertion order
    words: Vec<String>,
    /// Children indexed by the next letter of the sorted key
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Create an empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Words that terminate at this node
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the child keyed by `letter`
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Iterate children in ascending letter order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(letter, node)| (*letter, node))
    }

    /// Letters of the outgoing edges, ascending
    pub fn child_letters(&self) -> Vec<char> {
        self.children.keys().copied().collect()
    }

    /// Check if any word terminates here
    pub fn is_terminal(&self) -> bool {
        !self.words.is_empty()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Number of words stored in this subtree
    pub fn word_count(&self) -> usize {
        self.words.len() + self.children.values().map(TrieNode::word_count).sum::<usize>()
    }

    /// Length of the longest path below this node
    pub fn height(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }

    /// Get or create the child keyed by `letter`
    pub(crate) fn child_or_insert(&mut self, letter: char) -> &mut TrieNode {
        self.children.entry(letter).or_default()
    }

    /// Append a word, returns false if it is already present
    pub(crate) fn push_word(&mut self, word: &str) -> bool {
        if self.words.iter().any(|w| w == word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }
}

/// The trie key of a word: its letters sorted ascending
pub fn letter_key(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_key_sorted() {
        assert_eq!(letter_key("god"), vec!['d', 'g', 'o']);
        assert_eq!(letter_key("dog"), letter_key("god"));
        assert_eq!(letter_key("bob"), vec!['b', 'b', 'o']);
    }

    #[test]
    fn test_push_word_rejects_duplicates() {
        let mut node = TrieNode::new();
        assert!(node.push_word("dog"));
        assert!(node.push_word("god"));
        assert!(!node.push_word("dog"));
        assert_eq!(node.words(), ["dog", "god"]);
    }

    #[test]
    fn test_counts() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').push_word("a");
        root.child_or_insert('a')
            .child_or_insert('t')
            .push_word("at");

        assert_eq!(root.node_count(), 3);
        assert_eq!(root.word_count(), 2);
        assert_eq!(root.height(), 2);
        assert!(!root.is_terminal());
        assert_eq!(root.child_letters(), vec!['a']);
    }
}
