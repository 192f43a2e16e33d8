//! Fuzzy string similarity for fuzzmatch.
//!
//! This crate provides:
//! - Bag-of-words overlap on normalized tokens
//! - Case-insensitive Levenshtein edit distance
//! - Damerau-Levenshtein distance with true transpositions
//! - Batch ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! Every function is pure; nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use fuzzmatch_similarity::{compare, Mode};
//!
//! let score = compare("kitten", "sitting", Mode::Levenshtein);
//! assert!((score - 0.5714).abs() < 1e-4);
//! ```

mod compare;
mod error;
mod mode;
mod text;
mod tokenizer;
pub mod batch;
pub mod damerau;
pub mod levenshtein;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{best_match, rank, rank_json, Candidate, MatchResult, RankOptions};
pub use compare::{compare, compare_code, compare_default, try_compare};
pub use error::{Result, SimilarityError, SimilarityErrorCode};
pub use mode::Mode;
pub use text::{nth_index_of, utf16_size};
pub use tokenizer::{normalize, tokenize, TokenBag};
