//! Sorted-letter trie for anagram lookups
//!
//! Each word is stored under the path spelled by its letters in ascending
//! order:
//! - Anagrams collapse onto the same node
//! - Every root-to-node path is non-decreasing
//! - The trie is built once and is read-only afterwards

mod builder;
mod node;
mod tree;

pub use builder::{build, BuildStats, TrieBuilder};
pub use node::{letter_key, TrieNode};
pub use tree::LetterTrie;
