//! Similarity dispatch.

use crate::error::{Result, SimilarityError};
use crate::{damerau, levenshtein, tokenize, Mode};

/// Compare two strings with the given algorithm.
///
/// # Arguments
/// * `s1` - First string
/// * `s2` - Second string
/// * `mode` - Algorithm to use
///
/// # Returns
/// Similarity ratio between 0.0 (nothing in common) and 1.0 (identical
/// under the chosen metric)
///
/// # Example
/// ```
/// use fuzzmatch_similarity::{compare, Mode};
///
/// assert_eq!(compare("The Quick Fox", "quick fox the", Mode::BagOfWords), 1.0);
/// assert_eq!(compare("ca", "ac", Mode::DamerauLevenshtein), 0.75);
/// assert_eq!(compare("ca", "ac", Mode::Levenshtein), 0.0);
/// ```
pub fn compare(s1: &str, s2: &str, mode: Mode) -> f64 {
    let score = match mode {
        Mode::BagOfWords => bag_of_words(s1, s2),
        Mode::Levenshtein => levenshtein::similarity(s1, s2),
        Mode::DamerauLevenshtein => damerau::similarity(s1, s2),
    };
    tracing::trace!(%mode, score, "compared");
    score
}

/// Compare two strings with the default algorithm ([`Mode::Levenshtein`]).
pub fn compare_default(s1: &str, s2: &str) -> f64 {
    compare(s1, s2, Mode::default())
}

/// Compare two strings selecting the algorithm by legacy integer code
/// (1 = bag of words, 2 = Levenshtein, 3 = Damerau-Levenshtein).
///
/// An unrecognised code yields 0.0 rather than an error. Callers that want
/// to reject bad codes should resolve them with [`Mode::from_code`] first.
pub fn compare_code(s1: &str, s2: &str, code: i32) -> f64 {
    match Mode::from_code(code) {
        Ok(mode) => compare(s1, s2, mode),
        Err(_) => {
            tracing::warn!(code, "unknown similarity mode code, scoring 0");
            0.0
        }
    }
}

/// Compare two possibly absent strings.
///
/// # Errors
/// Returns [`SimilarityError::InvalidArgument`] if either input is `None`.
pub fn try_compare(s1: Option<&str>, s2: Option<&str>, mode: Mode) -> Result<f64> {
    let s1 = s1.ok_or_else(|| SimilarityError::missing("s1"))?;
    let s2 = s2.ok_or_else(|| SimilarityError::missing("s2"))?;
    Ok(compare(s1, s2, mode))
}

/// Shared-token ratio: multiset overlap divided by the larger token count.
fn bag_of_words(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let w1 = tokenize(s1);
    let w2 = tokenize(s2);
    let largest = w1.len().max(w2.len());
    if largest == 0 {
        return 0.0;
    }

    w1.overlap(&w2) as f64 / largest as f64
}
