//! Property-based tests for snailfish numbers

use aoc_solutions::utils::snailfish::SnailNumber;
use proptest::prelude::*;

/// Bracketed text of a pair whose elements nest at most `depth` more levels
fn snail_text(depth: u32, max_leaf: u32) -> impl Strategy<Value = String> {
    let element = (0..=max_leaf).prop_map(|v| v.to_string()).prop_recursive(
        depth,
        64,
        2,
        |inner| (inner.clone(), inner).prop_map(|(l, r)| format!("[{l},{r}]")),
    );
    (element.clone(), element).prop_map(|(l, r)| format!("[{l},{r}]"))
}

/// Numbers that are already reduced: nothing nested in four pairs, no value above 9
fn reduced_text() -> impl Strategy<Value = String> {
    snail_text(3, 9)
}

/// Numbers that usually need exploding and splitting
fn unreduced_text() -> impl Strategy<Value = String> {
    snail_text(6, 30)
}

fn parse(text: &str) -> SnailNumber {
    text.parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_render_roundtrip(text in unreduced_text()) {
        prop_assert_eq!(parse(&text).to_string(), text);
    }

    #[test]
    fn prop_shallow_small_numbers_are_reduced(text in reduced_text()) {
        let mut number = parse(&text);
        prop_assert!(number.is_reduced());
        prop_assert!(!number.explode());
        prop_assert!(!number.split());
        prop_assert_eq!(number.to_string(), text);
    }

    #[test]
    fn prop_reduce_is_idempotent(text in unreduced_text()) {
        let mut number = parse(&text);
        number.reduce();
        prop_assert!(number.is_reduced());

        let mut again = number.clone();
        again.reduce();
        prop_assert_eq!(again, number);
    }

    #[test]
    fn prop_sum_of_reduced_numbers_is_reduced(a in reduced_text(), b in reduced_text()) {
        let sum = parse(&a) + parse(&b);
        prop_assert!(sum.is_reduced());

        // The rendered sum describes the same tree
        let reparsed = parse(&sum.to_string());
        prop_assert_eq!(reparsed.magnitude(), sum.magnitude());
        prop_assert_eq!(reparsed, sum);
    }

    #[test]
    fn prop_add_keeps_operands_when_nothing_to_reduce(a in snail_text(2, 9), b in snail_text(2, 9)) {
        let sum = parse(&a) + parse(&b);
        prop_assert_eq!(sum.to_string(), format!("[{a},{b}]"));
        prop_assert_eq!(
            sum.magnitude(),
            3 * parse(&a).magnitude() + 2 * parse(&b).magnitude()
        );
    }
}
