//! Candidate enumeration

mod candidates;

pub use candidates::{search, CandidateSearch, SearchLimits, SearchOutcome, SearchStats};
