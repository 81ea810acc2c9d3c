//! Single-file trie artifact
//!
//! File format:
//! ```text
//! [HEADER: 64 bytes]
//!   - magic: 8 bytes ("ANAGRAMS")
//!   - version: 4 bytes (u32 LE)
//!   - flags: 4 bytes (reserved)
//!   - node_count: 8 bytes (u64 LE)
//!   - word_count: 8 bytes (u64 LE)
//!   - checksum: 32 bytes (BLAKE3 of the payload)
//!
//! [PAYLOAD: variable]
//!   - zstd(bincode(root TrieNode))
//! ```

use crate::model::Checksum;
use crate::store::blob::{decode_tree, encode_tree};
use crate::trie::LetterTrie;
use crate::{Error, Result, MAGIC, VERSION};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const HEADER_SIZE: usize = 64;

/// Fixed-size artifact header
#[derive(Clone, Debug, PartialEq, Eq)]
struct Header {
    version: u32,
    flags: u32,
    node_count: u64,
    word_count: u64,
    checksum: Checksum,
}

impl Header {
    fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut header = [0u8; HEADER_SIZE];
        header[0..8].copy_from_slice(MAGIC);
        header[8..12].copy_from_slice(&self.version.to_le_bytes());
        header[12..16].copy_from_slice(&self.flags.to_le_bytes());
        header[16..24].copy_from_slice(&self.node_count.to_le_bytes());
        header[24..32].copy_from_slice(&self.word_count.to_le_bytes());
        header[32..64].copy_from_slice(self.checksum.as_bytes());
        header
    }

    fn from_bytes(header: &[u8; HEADER_SIZE]) -> Result<Self> {
        if &header[0..8] != MAGIC {
            return Err(Error::InvalidFile("Invalid magic bytes".into()));
        }

        let version = u32::from_le_bytes(array_at(header, 8));
        if version != VERSION {
            return Err(Error::VersionMismatch {
                expected: VERSION,
                found: version,
            });
        }

        Ok(Header {
            version,
            flags: u32::from_le_bytes(array_at(header, 12)),
            node_count: u64::from_le_bytes(array_at(header, 16)),
            word_count: u64::from_le_bytes(array_at(header, 24)),
            checksum: Checksum::from_bytes(array_at(header, 32)),
        })
    }
}

/// Copy `N` bytes starting at `offset` out of the header
fn array_at<const N: usize>(header: &[u8; HEADER_SIZE], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&header[offset..offset + N]);
    out
}

/// What an artifact header says about the tree it holds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub version: u32,
    pub node_count: u64,
    pub word_count: u64,
    pub checksum: Checksum,
    /// Compressed payload size in bytes
    pub payload_size: u64,
}

/// Write `trie` to `path`, replacing any existing artifact atomically
pub fn save_trie(trie: &LetterTrie, path: impl AsRef<Path>) -> Result<ArtifactInfo> {
    let path = path.as_ref();
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let payload = encode_tree(trie.root())?;
    let header = Header {
        version: VERSION,
        flags: 0,
        node_count: trie.node_count() as u64,
        word_count: trie.word_count() as u64,
        checksum: Checksum::digest(&payload),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        writer.write_all(&header.to_bytes())?;
        writer.write_all(&payload)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    log::debug!("Saved {} ({} payload bytes)", path.display(), payload.len());

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        version: header.version,
        node_count: header.node_count,
        word_count: header.word_count,
        checksum: header.checksum,
        payload_size: payload.len() as u64,
    })
}

/// Load and verify a trie written by [`save_trie`]
pub fn load_trie(path: impl AsRef<Path>) -> Result<LetterTrie> {
    let path = path.as_ref();
    let mut file = open(path)?;
    let header = read_header(&mut file, path)?;

    let mut payload = Vec::new();
    file.read_to_end(&mut payload)?;

    if Checksum::digest(&payload) != header.checksum {
        return Err(Error::Corruption(format!(
            "Checksum mismatch in {}",
            path.display()
        )));
    }

    let trie = LetterTrie::from_root(decode_tree(&payload)?);

    if trie.root().is_terminal() {
        return Err(Error::Corruption(format!(
            "Root node of {} holds words",
            path.display()
        )));
    }
    if trie.node_count() as u64 != header.node_count
        || trie.word_count() as u64 != header.word_count
    {
        return Err(Error::Corruption(format!(
            "Tree in {} does not match its header ({} nodes / {} words, header says {} / {})",
            path.display(),
            trie.node_count(),
            trie.word_count(),
            header.node_count,
            header.word_count
        )));
    }

    log::debug!(
        "Loaded {} ({} nodes, {} words, checksum {})",
        path.display(),
        header.node_count,
        header.word_count,
        header.checksum
    );
    Ok(trie)
}

/// Read only the header of an artifact
pub fn read_info(path: impl AsRef<Path>) -> Result<ArtifactInfo> {
    let path = path.as_ref();
    let mut file = open(path)?;
    let header = read_header(&mut file, path)?;
    let file_size = file.metadata()?.len();

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        version: header.version,
        node_count: header.node_count,
        word_count: header.word_count,
        checksum: header.checksum,
        payload_size: file_size.saturating_sub(HEADER_SIZE as u64),
    })
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ArtifactMissing(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

fn read_header(file: &mut File, path: &Path) -> Result<Header> {
    let mut header = [0u8; HEADER_SIZE];
    file.read_exact(&mut header).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            Error::InvalidFile(format!("{} is too short to be an artifact", path.display()))
        }
        _ => Error::Io(e),
    })?;
    Header::from_bytes(&header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rack;
    use crate::ops::{find_candidates, FlagFilters};
    use crate::trie::build;
    use tempfile::tempdir;

    fn sample() -> LetterTrie {
        build(["dog", "god", "cat", "act", "cats", "scat", "a", "at"]).0
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        let trie = sample();

        let info = save_trie(&trie, &path).unwrap();
        assert_eq!(info.word_count, 8);
        assert_eq!(info.node_count, trie.node_count() as u64);

        let loaded = load_trie(&path).unwrap();
        assert_eq!(loaded, trie);
    }

    #[test]
    fn test_loaded_trie_answers_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        let trie = sample();
        save_trie(&trie, &path).unwrap();
        let loaded = load_trie(&path).unwrap();

        for rack in ["dog", "cats", "_at", "___", "tacs", ""] {
            let tokens = Rack::parse(rack).unwrap();
            let flags = FlagFilters::new();
            assert_eq!(
                find_candidates(&trie, tokens.tokens(), None, &flags),
                find_candidates(&loaded, tokens.tokens(), None, &flags),
                "rack {:?}",
                rack
            );
        }
    }

    #[test]
    fn test_save_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");

        save_trie(&sample(), &path).unwrap();
        save_trie(&build(["zed"]).0, &path).unwrap();

        let loaded = load_trie(&path).unwrap();
        assert_eq!(loaded.word_count(), 1);
        assert!(loaded.contains("zed"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("words.db");

        save_trie(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.db");

        assert!(matches!(load_trie(&path), Err(Error::ArtifactMissing(p)) if p == path));
        assert!(matches!(read_info(&path), Err(Error::ArtifactMissing(_))));
    }

    #[test]
    fn test_bad_magic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        fs::write(&path, [7u8; 80]).unwrap();

        assert!(matches!(load_trie(&path), Err(Error::InvalidFile(_))));
    }

    #[test]
    fn test_truncated_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        fs::write(&path, b"ANAGRAMS").unwrap();

        assert!(matches!(load_trie(&path), Err(Error::InvalidFile(_))));
    }

    #[test]
    fn test_version_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        save_trie(&sample(), &path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[8..12].copy_from_slice(&(VERSION + 1).to_le_bytes());
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            load_trie(&path),
            Err(Error::VersionMismatch { found, .. }) if found == VERSION + 1
        ));
    }

    #[test]
    fn test_corrupted_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        save_trie(&sample(), &path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(load_trie(&path), Err(Error::Corruption(_))));
    }

    #[test]
    fn test_header_counts_checked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        save_trie(&sample(), &path).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[24..32].copy_from_slice(&99u64.to_le_bytes());
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(load_trie(&path), Err(Error::Corruption(_))));
    }

    #[test]
    fn test_read_info() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.db");
        let saved = save_trie(&sample(), &path).unwrap();

        let info = read_info(&path).unwrap();
        assert_eq!(info, saved);
    }
}
