//! Word tokenization for bag-of-words comparison.
//!
//! Normalization runs these steps in order:
//! 1. drop the possessive `'s`
//! 2. drop `? ! # % ' ( ) ,`
//! 3. turn `_`, `-` and `.` into spaces
//! 4. collapse whitespace runs into a single space
//! 5. split camel case (`FooBar` -> `Foo Bar`, `FOO` untouched)
//! 6. lower-case
//!
//! Step 2 would also eat the apostrophe of `'s`, so step 1 must come first.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?!#%'(),]").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\-.]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Multiset of normalized words.
///
/// Repeated words are counted rather than stored under synthetic names, so
/// `"the cat the"` holds `the` twice and `cat` once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBag {
    counts: HashMap<String, usize>,
    total: usize,
}

impl TokenBag {
    /// Total number of tokens, repeats included.
    pub fn len(&self) -> usize {
        self.total
    }

    /// True if no token was produced.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `word`.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// True if `word` occurs at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Distinct words, in no particular order.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(word, occurrences)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Size of the multiset intersection: the k-th occurrence of a word
    /// matches only if the other bag holds at least k of it.
    pub fn overlap(&self, other: &TokenBag) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .map(|(word, count)| count.min(large.count(word)))
            .sum()
    }

    /// Disambiguated set form: the k-th occurrence of `word` becomes `"{word}{k}"`.
    pub fn to_marked_set(&self) -> BTreeSet<String> {
        self.iter()
            .flat_map(|(word, count)| (1..=count).map(move |k| format!("{}{}", word, k)))
            .collect()
    }

    fn insert(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.total += 1;
    }
}

impl<'a> FromIterator<&'a str> for TokenBag {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut bag = TokenBag::default();
        for word in iter {
            bag.insert(word);
        }
        bag
    }
}

/// Apply the normalization pipeline without splitting.
pub fn normalize(s: &str) -> String {
    let text = s.replace("'s", "");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = SEPARATORS.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    split_camel_case(&text).to_lowercase()
}

/// Normalize `s` and split it into a bag of words.
///
/// Empty tokens (from leading or trailing spaces) are dropped; empty input
/// yields an empty bag.
///
/// # Example
/// ```
/// use fuzzmatch_similarity::tokenize;
///
/// let bag = tokenize("FooBar_baz.Qux");
/// assert_eq!(bag.len(), 4);
/// assert!(bag.contains("foo") && bag.contains("qux"));
/// ```
pub fn tokenize(s: &str) -> TokenBag {
    normalize(s).split(' ').filter(|token| !token.is_empty()).collect()
}

/// Insert a space where an ASCII lowercase letter is followed by an
/// uppercase letter that starts a capitalized word.
fn split_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let boundary = i > 0
            && chars[i - 1].is_ascii_lowercase()
            && c.is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
        if boundary {
            out.push(' ');
        }
        out.push(c);
    }

    out
}
