//! Payload codec - the serialized, compressed trie

use crate::trie::TrieNode;
use crate::{Error, Result};

/// zstd level used for new artifacts
const COMPRESSION_LEVEL: i32 = 3;

/// Serialize the whole tree with bincode, then compress
pub fn encode_tree(root: &TrieNode) -> Result<Vec<u8>> {
    let raw = bincode::serialize(root)?;
    Ok(zstd::encode_all(raw.as_slice(), COMPRESSION_LEVEL)?)
}

/// Decompress and decode a tree written by [`encode_tree`]
pub fn decode_tree(payload: &[u8]) -> Result<TrieNode> {
    if payload.is_empty() {
        return Err(Error::Corruption("Empty payload".into()));
    }

    let raw = zstd::decode_all(payload)
        .map_err(|e| Error::Corruption(format!("Payload decompression failed: {}", e)))?;

    bincode::deserialize(&raw)
        .map_err(|e| Error::Corruption(format!("Payload decoding failed: {}", e)))
}
