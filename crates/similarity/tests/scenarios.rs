//! End-to-end comparisons through the public API.

use fuzzmatch_similarity::{
    compare, compare_default, damerau, levenshtein, rank, tokenize, Candidate, Mode, RankOptions,
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[test]
fn kitten_sitting() {
    assert_eq!(levenshtein::distance("kitten", "sitting"), 3);
    assert_close(compare("kitten", "sitting", Mode::Levenshtein), 4.0 / 7.0);
}

#[test]
fn adjacent_swap_separates_algorithms() {
    assert_eq!(damerau::distance("ca", "ac"), 1);
    assert_eq!(levenshtein::distance("ca", "ac"), 2);
    assert_close(compare("ca", "ac", Mode::DamerauLevenshtein), 0.75);
    assert_close(compare("ca", "ac", Mode::Levenshtein), 0.0);
}

#[test]
fn empty_strings() {
    assert_close(compare("", "", Mode::Levenshtein), 1.0);
    assert_close(compare_default("", ""), 1.0);
}

#[test]
fn word_order_does_not_matter() {
    assert_close(compare("The Quick Fox", "quick fox the", Mode::BagOfWords), 1.0);
}

#[test]
fn tokenize_filename() {
    let bag = tokenize("FooBar_baz.Qux");
    let mut words: Vec<&str> = bag.distinct().collect();
    words.sort_unstable();
    assert_eq!(words, vec!["bar", "baz", "foo", "qux"]);
}

#[test]
fn disjoint_strings() {
    assert_close(compare("abc", "xyz", Mode::Levenshtein), 0.0);
}

#[test]
fn filename_matching() {
    let candidates = vec![
        Candidate::new("1", "Vacation Photos 2021.zip"),
        Candidate::new("2", "vacation_photos_2021 (1).zip"),
        Candidate::new("3", "budget.xlsx"),
    ];

    let options = RankOptions::default()
        .with_mode(Mode::BagOfWords)
        .with_threshold(0.5);
    let results = rank("VacationPhotos-2021.zip", &candidates, &options);

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}
