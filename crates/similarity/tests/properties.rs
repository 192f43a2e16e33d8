//! Property tests for the similarity contract.

use fuzzmatch_similarity::{compare, damerau, levenshtein, tokenize, Mode};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::BagOfWords),
        Just(Mode::Levenshtein),
        Just(Mode::DamerauLevenshtein),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z _.'-]{0,16}",
        "\\PC{0,10}",
    ]
}

proptest! {
    #[test]
    fn identical_strings_score_one(s in text_strategy(), mode in mode_strategy()) {
        prop_assert_eq!(compare(&s, &s, mode), 1.0);
    }

    #[test]
    fn scores_stay_in_unit_interval(a in text_strategy(), b in text_strategy(), mode in mode_strategy()) {
        let score = compare(&a, &b, mode);
        prop_assert!((0.0..=1.0).contains(&score), "score {} for {:?} / {:?}", score, a, b);
    }

    #[test]
    fn comparison_is_symmetric(a in text_strategy(), b in text_strategy(), mode in mode_strategy()) {
        prop_assert_eq!(compare(&a, &b, mode), compare(&b, &a, mode));
    }

    #[test]
    fn distance_at_least_length_difference(a in text_strategy(), b in text_strategy()) {
        let diff = a.chars().count().abs_diff(b.chars().count());
        prop_assert!(levenshtein::distance(&a, &b) >= diff);
        prop_assert!(damerau::distance(&a, &b) >= diff);
    }

    #[test]
    fn damerau_zero_only_for_equal(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(damerau::distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn levenshtein_zero_only_for_case_insensitive_equal(a in "[a-zA-Z]{0,10}", b in "[a-zA-Z]{0,10}") {
        prop_assert_eq!(levenshtein::distance(&a, &b) == 0, a.eq_ignore_ascii_case(&b));
    }

    #[test]
    fn transpositions_never_cost_more(a in "[a-d]{0,10}", b in "[a-d]{0,10}") {
        prop_assert!(damerau::distance(&a, &b) <= levenshtein::distance(&a, &b));
    }

    #[test]
    fn tokenize_is_deterministic(s in text_strategy()) {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
    }

    #[test]
    fn tokens_are_nonempty_and_lowercase(s in "[a-zA-Z _.-]{0,24}") {
        let bag = tokenize(&s);
        for word in bag.distinct() {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.contains(' '));
            prop_assert_eq!(word.to_lowercase(), word);
        }
    }
}
