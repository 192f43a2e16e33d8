//! Case-insensitive Levenshtein edit distance.

/// Lower-case a character without changing the string length.
///
/// Characters whose lower-case form expands to several characters
/// (e.g. `İ`) are compared as-is.
#[inline]
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Calculate the case-insensitive Levenshtein edit distance between two strings.
///
/// Keeps a single row of `b.len() + 1` costs and carries the diagonal
/// predecessor in `last_value` while sweeping left to right.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions or substitutions
/// needed to transform `a` into `b`
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().map(fold_case).collect();
    let b_chars: Vec<char> = b.chars().map(fold_case).collect();
    row_distance(&a_chars, &b_chars)
}

fn row_distance(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut costs: Vec<usize> = (0..=n).collect();

    for (i, &ac) in a.iter().enumerate() {
        // costs[j] still holds row i; last_value becomes row i+1 as we go
        let mut last_value = i + 1;
        for j in 1..=n {
            let mut new_value = costs[j - 1];
            if ac != b[j - 1] {
                new_value = new_value.min(last_value).min(costs[j]) + 1;
            }
            costs[j - 1] = last_value;
            last_value = new_value;
        }
        costs[n] = last_value;
    }

    costs[n]
}

/// Similarity ratio in `[0, 1]` derived from the edit distance.
///
/// The ratio is `(len(longer) - distance) / len(longer)`. Two empty
/// strings are identical and score 1.0.
///
/// # Example
/// ```
/// use fuzzmatch_similarity::levenshtein;
///
/// let ratio = levenshtein::similarity("kitten", "sitting");
/// assert!((ratio - 4.0 / 7.0).abs() < 1e-9);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() < b.chars().count() {
        (b, a)
    } else {
        (a, b)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    (longer_len - distance(longer, shorter)) as f64 / longer_len as f64
}
