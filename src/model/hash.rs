//! Payload checksum using BLAKE3

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte BLAKE3 digest stored in the artifact header
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum([u8; 32]);

impl Checksum {
    /// Create a checksum from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Checksum(bytes)
    }

    /// Checksum arbitrary data
    pub fn digest(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Checksum(*hash.as_bytes())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_digest() {
        let c1 = Checksum::digest(b"dog");
        let c2 = Checksum::digest(b"dog");
        let c3 = Checksum::digest(b"god");

        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn test_checksum_bytes_roundtrip() {
        let c1 = Checksum::digest(b"payload");
        let c2 = Checksum::from_bytes(*c1.as_bytes());
        assert_eq!(c1, c2);
        assert_eq!(c1.to_hex().len(), 64);
    }

    #[test]
    fn test_checksum_formatting() {
        let c = Checksum::digest(b"test");
        assert_eq!(c.to_string(), c.to_hex());
        assert_eq!(format!("{:?}", c), format!("Checksum({})", c.to_hex()));
    }
}
