//! Repository modules implementing the two document collections.
//!
//! Each module adds methods to `KotobaService` via `impl KotobaService` blocks.

pub mod progress;
pub mod word_set;
