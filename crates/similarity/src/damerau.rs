//! Damerau-Levenshtein distance (optimal alignment with true transpositions).
//!
//! Implements the Lowrance-Wagner dynamic program. Besides insertions,
//! deletions and substitutions, swapping two characters counts as a single
//! edit, even when other characters sit between the swapped pair: the
//! characters in between are then paid for as deletions and insertions.
//!
//! The table carries an extra border row and column filled with an
//! unreachable cost so the transposition lookup can index position 0
//! without special cases.

use std::collections::HashMap;

/// Row-major `(rows x cols)` table of edit costs.
struct Table {
    cells: Vec<usize>,
    cols: usize,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Calculate the Damerau-Levenshtein distance between two strings.
///
/// Case-sensitive. Equal strings return 0 without building the table.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Minimum number of insertions, deletions, substitutions and adjacent
/// transpositions needed to transform `a` into `b`
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    table_distance(&a_chars, &b_chars)
}

fn table_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();
    let inf = m + n;

    // Last row of `a` in which each character was seen; 0 = not yet.
    let mut last_row: HashMap<char, usize> = a.iter().chain(b).map(|&c| (c, 0)).collect();

    let mut h = Table::new(m + 2, n + 2);
    for i in 0..=m {
        h.set(i + 1, 0, inf);
        h.set(i + 1, 1, i);
    }
    for j in 0..=n {
        h.set(0, j + 1, inf);
        h.set(1, j + 1, j);
    }

    for i in 1..=m {
        let mut last_match_col = 0;
        for j in 1..=n {
            let i1 = last_row[&b[j - 1]];
            let j1 = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = h.get(i, j) + cost;
            let insertion = h.get(i + 1, j) + 1;
            let deletion = h.get(i, j + 1) + 1;
            let transposition = h.get(i1, j1) + (i - i1 - 1) + 1 + (j - j1 - 1);

            h.set(
                i + 1,
                j + 1,
                substitution.min(insertion).min(deletion).min(transposition),
            );
        }
        last_row.insert(a[i - 1], i);
    }

    h.get(m + 1, n + 1)
}

/// Similarity ratio in `[0, 1]`: `1 - distance / (len(a) + len(b))`.
///
/// # Example
/// ```
/// use fuzzmatch_similarity::damerau;
///
/// assert_eq!(damerau::similarity("ca", "ac"), 0.75);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    // Also covers two empty strings, where the ratio would be 0/0.
    if a == b {
        return 1.0;
    }

    let total = a.chars().count() + b.chars().count();
    1.0 - distance(a, b) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance("same", "same"), 0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_adjacent_swap_is_one_edit() {
        assert_eq!(distance("ca", "ac"), 1);
        assert_eq!(distance("abcdef", "abdcef"), 1);
    }

    #[test]
    fn test_swap_with_gap() {
        // "ca" -> "abc": swap c/a, then insert b between them.
        assert_eq!(distance("ca", "abc"), 2);
    }

    #[test]
    fn test_plain_edits() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("abc", "xyz"), 3);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(distance("Abc", "abc"), 1);
    }

    #[test]
    fn test_repeated_characters() {
        assert_eq!(distance("aaaa", "aa"), 2);
        assert_eq!(distance("abab", "baba"), 2);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("ca", "abc"), ("teh", "the"), ("martha", "marhta"), ("abcd", "badc")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_similarity_ratios() {
        assert_eq!(similarity("ca", "ac"), 0.75);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("abc", "xyz"), 0.5);
    }

    #[test]
    fn test_lengths_count_chars() {
        // An astral char is one edit and one unit of length
        assert_eq!(distance("😀a", "a"), 1);
        assert!((similarity("😀a", "a") - 2.0 / 3.0).abs() < 1e-9);
    }
}
