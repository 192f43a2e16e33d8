//! Algorithm selection.

use crate::error::SimilarityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity algorithm used by [`compare`](crate::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Shared normalized word tokens, order ignored
    BagOfWords,
    /// Case-insensitive insert/delete/substitute edit distance
    #[default]
    Levenshtein,
    /// Edit distance counting adjacent transpositions as one edit
    DamerauLevenshtein,
}

impl Mode {
    /// Every mode, in legacy code order.
    pub const ALL: [Mode; 3] = [Mode::BagOfWords, Mode::Levenshtein, Mode::DamerauLevenshtein];

    /// Legacy integer code (1, 2 or 3).
    pub fn code(self) -> i32 {
        match self {
            Mode::BagOfWords => 1,
            Mode::Levenshtein => 2,
            Mode::DamerauLevenshtein => 3,
        }
    }

    /// Resolve a legacy integer code.
    pub fn from_code(code: i32) -> Result<Self, SimilarityError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or_else(|| SimilarityError::UnknownMode(code.to_string()))
    }

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::BagOfWords => "bag_of_words",
            Mode::Levenshtein => "levenshtein",
            Mode::DamerauLevenshtein => "damerau_levenshtein",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SimilarityError;

    /// Accepts the canonical names, case-insensitively, with `-` or `_`,
    /// plus the short aliases `bow`, `lev` and `damerau`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "bag_of_words" | "bow" => Ok(Mode::BagOfWords),
            "levenshtein" | "lev" => Ok(Mode::Levenshtein),
            "damerau_levenshtein" | "damerau" => Ok(Mode::DamerauLevenshtein),
            _ => Err(SimilarityError::UnknownMode(s.to_string())),
        }
    }
}
