//! # kotoba-engine
//!
//! Word-set ingestion and sampling.
//!
//! The pure pieces (parser, dedup-merge, sampling, statistics, search) take
//! plain values and never touch storage. [`VocabEngine`] wires them to the
//! libSQL store and is what the HTTP layer calls.

pub mod error;
pub mod merge;
pub mod parser;
pub mod sampling;
pub mod search;
pub mod stats;
pub mod workflow;

pub use error::EngineError;
pub use parser::SetParser;
pub use workflow::VocabEngine;

pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
