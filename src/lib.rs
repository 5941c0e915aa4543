//! Deterministic derived-field computation for incremental search indexing.
//!
//! `index-derive` turns raw source records into the secondary fields a
//! search index queries on: character n-grams for substring search, geocell
//! codes for prefix/proximity search, and `MMDD` codes for yearly recurring
//! events. Every derivation is pure and synchronous: identical inputs
//! (including the reference date) always produce identical outputs, and
//! malformed input degrades to "no value" instead of an error.

pub mod calendar;
pub mod derivation;
pub mod geocell;
pub mod record;
pub mod tokenize;
pub mod types;
