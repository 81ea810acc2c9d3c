//! Persisted trie artifact
//!
//! The finished trie is written once by `init` and read back verbatim on
//! every later start. The payload is bincode, compressed with zstd and
//! guarded by a BLAKE3 checksum in the header.

mod blob;
mod file_store;

pub use blob::{decode_tree, encode_tree};
pub use file_store::{load_trie, read_info, save_trie, ArtifactInfo};
