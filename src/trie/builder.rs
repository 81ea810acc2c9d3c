//! One-shot construction of a letter trie from a word list

use super::node::letter_key;
use super::{LetterTrie, TrieNode};
use crate::{Error, Result};
use serde::Serialize;

/// Counters reported after a build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Words added to the trie
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Entries skipped because they were empty
    pub rejected: usize,
}

/// Mutable trie under construction
///
/// Once [`TrieBuilder::finish`] is called the result is a read-only
/// [`LetterTrie`]; there is no way to insert into a finished trie.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
    stats: BuildStats,
}

impl TrieBuilder {
    /// Create a builder with an empty root
    pub fn new() -> Self {
        TrieBuilder::default()
    }

    /// Insert a word along the path of its sorted letters
    ///
    /// Returns `Ok(false)` if the word was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            self.stats.rejected += 1;
            return Err(Error::EmptyWord);
        }

        let mut node = &mut self.root;
        for letter in letter_key(word) {
            node = node.child_or_insert(letter);
        }

        // Store the original spelling, not the key
        if node.push_word(word) {
            self.stats.inserted += 1;
            Ok(true)
        } else {
            self.stats.duplicates += 1;
            Ok(false)
        }
    }

    /// Insert every word, skipping empty entries
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            // Empty words are counted in stats.rejected
            let _ = self.insert(word.as_ref());
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Freeze the trie
    pub fn finish(self) -> LetterTrie {
        LetterTrie::from_root(self.root)
    }
}

/// Build a trie from a word list in one pass
pub fn build<I, S>(words: I) -> (LetterTrie, BuildStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TrieBuilder::new();
    builder.extend(words);
    let stats = builder.stats();
    (builder.finish(), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anagrams_share_node() {
        let (trie, stats) = build(["dog", "god"]);
        assert_eq!(stats.inserted, 2);

        let node = trie.lookup("odg").unwrap();
        let mut words = node.words().to_vec();
        words.sort();
        assert_eq!(words, vec!["dog", "god"]);
    }

    #[test]
    fn test_path_is_sorted_letters() {
        let (trie, _) = build(["cab"]);
        let root = trie.root();

        assert_eq!(root.child_letters(), vec!['a']);
        let a = root.child('a').unwrap();
        let b = a.child('b').unwrap();
        let c = b.child('c').unwrap();
        assert_eq!(c.words(), ["cab"]);
        assert!(root.child('c').is_none());
    }

    #[test]
    fn test_root_never_holds_words() {
        let mut builder = TrieBuilder::new();
        assert!(matches!(builder.insert(""), Err(Error::EmptyWord)));
        builder.insert("a").unwrap();

        let trie = builder.finish();
        assert!(trie.root().words().is_empty());
    }

    #[test]
    fn test_stats_count_duplicates_and_rejects() {
        let (trie, stats) = build(["cat", "act", "cat", ""]);
        assert_eq!(
            stats,
            BuildStats {
                inserted: 2,
                duplicates: 1,
                rejected: 1
            }
        );
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_repeated_letters() {
        let (trie, _) = build(["bob", "bo"]);
        assert_eq!(trie.lookup("ob").unwrap().words(), ["bo"]);

        // b -> b -> o, not b -> o -> b
        let b = trie.root().child('b').unwrap();
        assert_eq!(b.child('b').unwrap().child('o').unwrap().words(), ["bob"]);
        assert!(b.child('o').unwrap().child('b').is_none());
    }
}
