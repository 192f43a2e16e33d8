//! Small string helpers used alongside the similarity functions.

/// Number of bytes `s` occupies when stored as UTF-16.
///
/// ```
/// assert_eq!(fuzzmatch_similarity::utf16_size("abc"), 6);
/// ```
#[inline]
pub fn utf16_size(s: &str) -> u64 {
    s.encode_utf16().count() as u64 * 2
}

/// Char index of the `n`-th occurrence of `c` in `s`.
///
/// Occurrences are counted from the left, or from the right when `reverse`
/// is set; the returned index is always measured from the left.
///
/// # Returns
/// `None` if `n` is 0 or `s` holds fewer than `n` occurrences of `c`
pub fn nth_index_of(s: &str, c: char, n: usize, reverse: bool) -> Option<usize> {
    if n == 0 {
        return None;
    }

    let mut positions = s.chars().enumerate().filter(|&(_, ch)| ch == c).map(|(i, _)| i);
    if reverse {
        positions.collect::<Vec<_>>().into_iter().rev().nth(n - 1)
    } else {
        positions.nth(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_size() {
        assert_eq!(utf16_size(""), 0);
        assert_eq!(utf16_size("é"), 2);
        // Outside the BMP: one surrogate pair
        assert_eq!(utf16_size("😀"), 4);
    }

    #[test]
    fn test_nth_index_forward() {
        let path = "a/b/c/d";
        assert_eq!(nth_index_of(path, '/', 1, false), Some(1));
        assert_eq!(nth_index_of(path, '/', 3, false), Some(5));
        assert_eq!(nth_index_of(path, '/', 4, false), None);
    }

    #[test]
    fn test_nth_index_reverse() {
        let path = "a/b/c/d";
        assert_eq!(nth_index_of(path, '/', 1, true), Some(5));
        assert_eq!(nth_index_of(path, '/', 3, true), Some(1));
        assert_eq!(nth_index_of(path, '/', 4, true), None);
    }

    #[test]
    fn test_nth_index_zero() {
        assert_eq!(nth_index_of("aaa", 'a', 0, false), None);
        assert_eq!(nth_index_of("aaa", 'a', 0, true), None);
    }
}
