use proptest::prelude::*;
use strct::{distribute, is_palindrome, reverse_all, scramble, spoonerize, word_frequency};

fn sorted_chars(s: &str) -> Vec<char> {
    let mut v: Vec<char> = s.chars().collect();
    v.sort_unstable();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_reverse_is_an_involution(s in ".*") {
        prop_assert_eq!(reverse_all(&reverse_all(&s)), s);
    }

    #[test]
    fn prop_distribute_round_trips(s in "[a-c,;]{0,24}", delim in prop::sample::select(vec![",", ";", ",;", "ab"])) {
        let slices = distribute(&s, delim).unwrap();
        prop_assert_eq!(slices.join(delim), s);
    }

    #[test]
    fn prop_scramble_is_a_deterministic_permutation(s in ".{0,40}") {
        let out = scramble(&s);
        prop_assert_eq!(sorted_chars(&out), sorted_chars(&s));
        prop_assert_eq!(out, scramble(&s));
    }

    #[test]
    fn prop_palindrome_holds_for_mirrored_text(s in "[a-zA-Z ]{0,20}") {
        let mirrored = format!("{}{}", s, reverse_all(&s));
        prop_assert!(is_palindrome(&mirrored));
    }

    #[test]
    fn prop_spoonerize_guard_leaves_long_input_alone(words in prop::collection::vec("[a-z]{1,6}", 3..6), a in 1usize..3, b in 1usize..3) {
        let text = words.join(" ");
        prop_assert!(word_frequency(&text) > 2);
        prop_assert_eq!(spoonerize(&text, a, b).unwrap(), text);
    }

    #[test]
    fn prop_spoonerize_twice_restores_equal_lengths(w1 in "[a-z]{2,8}", w2 in "[a-z]{2,8}", n in 1usize..3) {
        let text = format!("{w1} {w2}");
        let once = spoonerize(&text, n, n).unwrap();
        prop_assert_eq!(spoonerize(&once, n, n).unwrap(), text);
    }
}
