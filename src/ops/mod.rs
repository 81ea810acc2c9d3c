//! Result pipeline: dedup, rank, pattern and flag filters, full queries

mod filter;
mod pipeline;
mod query;

pub use filter::{apply_filter, apply_flags, FlagFilters, PatternFilter, SEPARATOR};
pub use pipeline::{dedup, find_candidates, rank};
pub use query::{Query, QueryResult};
