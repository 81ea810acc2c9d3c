//! Core data model types for anagram_db

mod hash;
mod token;

pub use hash::Checksum;
pub use token::{Rack, Token, WILDCARD, WILDCARD_ALT};
