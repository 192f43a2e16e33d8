//! Batch ranking of candidates against a query, with optional parallelism.

use crate::error::{Result, SimilarityError};
use crate::{compare, Mode};
use serde::{Deserialize, Serialize};

/// A string to score against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Caller-supplied identifier
    pub id: String,
    /// Text compared against the query
    pub text: String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The candidate ID
    pub id: String,
    /// The candidate text
    pub text: String,
    /// Similarity ratio in `[0, 1]`
    pub score: f64,
}

/// Options controlling [`rank`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Algorithm used to score candidates
    pub mode: Mode,
    /// Minimum score a candidate needs to be kept
    pub threshold: f64,
    /// Maximum number of results (None for all)
    pub limit: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            threshold: 0.0,
            limit: None,
        }
    }
}

impl RankOptions {
    /// Set the algorithm.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the minimum score.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the maximum number of results; 0 means unlimited.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }
}

/// Score every candidate against `query` and return the best ones.
///
/// Results are sorted by score, highest first. Candidates with equal
/// scores keep their input order.
///
/// # Example
/// ```
/// use fuzzmatch_similarity::{rank, Candidate, RankOptions};
///
/// let candidates = vec![
///     Candidate::new("1", "holiday_photos.zip"),
///     Candidate::new("2", "tax_return_2023.pdf"),
/// ];
///
/// let results = rank("holiday-photos.zip", &candidates, &RankOptions::default());
/// assert_eq!(results[0].id, "1");
/// ```
pub fn rank(query: &str, candidates: &[Candidate], options: &RankOptions) -> Vec<MatchResult> {
    tracing::debug!(
        candidates = candidates.len(),
        mode = %options.mode,
        threshold = options.threshold,
        "ranking candidates"
    );

    let mut results = score_all(query, candidates, options.mode);

    results.retain(|r| r.score >= options.threshold);

    // Stable sort keeps input order among equal scores
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    results
}

/// Return the highest-scoring candidate, the earliest one on ties.
pub fn best_match(query: &str, candidates: &[Candidate], mode: Mode) -> Option<MatchResult> {
    score_all(query, candidates, mode)
        .into_iter()
        .fold(None, |best: Option<MatchResult>, current| match best {
            Some(b) if b.score >= current.score => Some(b),
            _ => Some(current),
        })
}

/// Rank candidates given as a JSON array of `{"id": ..., "text": ...}`.
///
/// # Errors
/// Returns [`SimilarityError::JsonError`] for malformed JSON and
/// [`SimilarityError::InvalidArgument`] for an item whose `text` is
/// missing or null.
pub fn rank_json(query: &str, items_json: &str, options: &RankOptions) -> Result<Vec<MatchResult>> {
    #[derive(Deserialize)]
    struct Item {
        id: serde_json::Value,
        #[serde(default)]
        text: Option<String>,
    }

    let items: Vec<Item> = serde_json::from_str(items_json)?;

    let candidates = items
        .into_iter()
        .map(|item| {
            let id = match item.id {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            match item.text {
                Some(text) => Ok(Candidate { id, text }),
                None => Err(SimilarityError::InvalidArgument(format!(
                    "candidate {} has no text",
                    id
                ))),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(rank(query, &candidates, options))
}

fn score_all(query: &str, candidates: &[Candidate], mode: Mode) -> Vec<MatchResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .map(|candidate| score_single(query, candidate, mode))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        candidates
            .iter()
            .map(|candidate| score_single(query, candidate, mode))
            .collect()
    }
}

#[inline]
fn score_single(query: &str, candidate: &Candidate, mode: Mode) -> MatchResult {
    MatchResult {
        id: candidate.id.clone(),
        text: candidate.text.clone(),
        score: compare(query, &candidate.text, mode),
    }
}
