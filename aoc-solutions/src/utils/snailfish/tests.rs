//! Tests for the snailfish module.

use super::*;

fn number(text: &str) -> SnailNumber {
    text.parse()
        .unwrap_or_else(|e| panic!("failed to parse {text}: {e}"))
}

fn fold_sum(lines: &[&str]) -> SnailNumber {
    lines
        .iter()
        .map(|line| number(line))
        .fold(None, |total, next| Some(SnailNumber::accumulate(total, next)))
        .expect("at least one line")
}

/// Walk the tree checking parent and side links, and that no freed slot is reachable
fn assert_links_consistent(n: &SnailNumber) {
    fn walk(n: &SnailNumber, id: NodeId, parent: Option<NodeId>, side: Side, seen: &mut usize) {
        assert!(!n.free.contains(&id), "node {id} is reachable but on the free list");
        let node = &n.nodes[id];
        assert_eq!(node.parent, parent, "parent link of node {id}");
        assert_eq!(node.side, side, "side of node {id}");
        *seen += 1;
        if let NodeKind::Pair { left, right } = node.kind {
            walk(n, left, Some(id), Side::Left, seen);
            walk(n, right, Some(id), Side::Right, seen);
        }
    }

    let mut seen = 0;
    walk(n, n.root, None, Side::Root, &mut seen);
    assert_eq!(seen, n.len(), "live node count");
}

const LARGER_EXAMPLE: [&str; 10] = [
    "[[[0,[4,5]],[0,0]],[[[4,5],[2,6]],[9,5]]]",
    "[7,[[[3,7],[4,3]],[[6,3],[8,8]]]]",
    "[[2,[[0,8],[3,4]]],[[[6,7],1],[7,[1,6]]]]",
    "[[[[2,4],7],[6,[0,5]]],[[[6,8],[2,8]],[[2,1],[4,5]]]]",
    "[7,[5,[[3,8],[1,4]]]]",
    "[[2,[2,2]],[8,[8,1]]]",
    "[2,9]",
    "[1,[[[9,3],9],[[9,0],[0,7]]]]",
    "[[[5,[7,4]],7],1]",
    "[[[[4,2],2],6],[8,7]]",
];

const HOMEWORK: [&str; 10] = [
    "[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]",
    "[[[5,[2,8]],4],[5,[[9,9],0]]]",
    "[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]",
    "[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]",
    "[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]",
    "[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]",
    "[[[[5,4],[7,7]],8],[[8,3],8]]",
    "[[9,3],[[9,9],[6,[4,9]]]]",
    "[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]",
    "[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]",
];

#[test]
fn test_parse_and_render_roundtrip() {
    for text in ["[1,2]", "[[1,2],3]", "[9,[8,7]]", "[[1,9],[8,5]]", "[[[[1,2],[3,4]],[[5,6],[7,8]]],9]"]
        .into_iter()
        .chain(HOMEWORK)
    {
        let parsed = number(text);
        assert_eq!(parsed.to_string(), text);
        assert_links_consistent(&parsed);
    }
}

#[test]
fn test_parse_multi_digit_regular_numbers() {
    let parsed = number("[10,[0,123]]");
    assert_eq!(parsed.to_string(), "[10,[0,123]]");
    assert!(!parsed.is_reduced());
}

#[test]
fn test_parse_rejects_malformed_input() {
    let cases: [(&str, usize, &str, Option<char>); 8] = [
        ("", 1, "'['", None),
        ("7", 1, "'['", Some('7')),
        ("[1,2", 5, "']'", None),
        ("[1 2]", 3, "','", Some(' ')),
        ("[1,x]", 4, "'[' or a digit", Some('x')),
        ("[[1,2],3]]", 10, "end of input", Some(']')),
        ("[,1]", 2, "'[' or a digit", Some(',')),
        ("[99999999999,1]", 2, "a regular number below 2^32", Some('9')),
    ];

    for (text, column, expected, found) in cases {
        let err = text.parse::<SnailNumber>().unwrap_err();
        assert_eq!(
            err,
            MalformedInput {
                column,
                expected,
                found
            },
            "input {text:?}"
        );
    }
}

#[test]
fn test_malformed_input_message() {
    let err = "[1,2".parse::<SnailNumber>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed snailfish number at column 5: expected ']', found end of input"
    );

    let err = "[1;2]".parse::<SnailNumber>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed snailfish number at column 3: expected ',', found ';'"
    );
}

#[test]
fn test_render_absent_number() {
    assert_eq!(render(None), "[]");
    assert_eq!(render(Some(&number("[[1,2],[[3,4],5]]"))), "[[1,2],[[3,4],5]]");
}

#[test]
fn test_colored_rendering() {
    let expected = "\x1b[1;31m[\x1b[0m\x1b[1;35m[\x1b[0m\x1b[1;35m1\x1b[0m\x1b[1;35m,\x1b[0m\x1b[1;36m2\x1b[0m\x1b[1;35m]\x1b[0m\x1b[1;31m,\x1b[0m\x1b[1;36m[\x1b[0m\x1b[1;35m[\x1b[0m\x1b[1;35m3\x1b[0m\x1b[1;35m,\x1b[0m\x1b[1;36m4\x1b[0m\x1b[1;35m]\x1b[0m\x1b[1;36m,\x1b[0m\x1b[1;36m5\x1b[0m\x1b[1;36m]\x1b[0m\x1b[1;31m]\x1b[0m";

    assert_eq!(number("[[1,2],[[3,4],5]]").colored().to_string(), expected);
}

#[test]
fn test_single_explode() {
    let cases = [
        ("[[[[[9,8],1],2],3],4]", "[[[[0,9],2],3],4]"),
        ("[7,[6,[5,[4,[3,2]]]]]", "[7,[6,[5,[7,0]]]]"),
        ("[[6,[5,[4,[3,2]]]],1]", "[[6,[5,[7,0]]],3]"),
        (
            "[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]",
            "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]",
        ),
        (
            "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]",
            "[[3,[2,[8,0]]],[9,[5,[7,0]]]]",
        ),
    ];

    for (input, expected) in cases {
        let mut n = number(input);
        assert!(n.explode(), "{input} should explode");
        assert_eq!(n.to_string(), expected);
        assert_links_consistent(&n);
    }
}

#[test]
fn test_explode_at_left_edge_skips_missing_neighbour() {
    // Nothing lies left of [9,8]: the 9 is dropped, the 8 lands on the 1
    let mut n = number("[[[[[9,8],1],2],3],4]");
    let before = n.len();

    assert!(n.explode());
    assert_eq!(n.to_string(), "[[[[0,9],2],3],4]");
    assert_eq!(n.len(), before - 2);
}

#[test]
fn test_explode_finds_pair_below_deeper_nesting() {
    // The depth-4 pair holds another pair, so the innermost pair goes first
    let mut n = number("[[[[[[1,2],3],4],5],6],7]");
    assert!(n.explode());
    assert_eq!(n.to_string(), "[[[[[0,5],4],5],6],7]");
    assert!(n.explode());
    assert_eq!(n.to_string(), "[[[[0,9],5],6],7]");
    assert!(!n.explode());
}

#[test]
fn test_explode_without_deep_pair_is_noop() {
    let mut n = number("[[[[1,2],[3,4]],[[5,6],[7,8]]],9]");
    assert!(!n.explode());
    assert_eq!(n.to_string(), "[[[[1,2],[3,4]],[[5,6],[7,8]]],9]");
}

#[test]
fn test_single_split() {
    let cases = [
        ("[1,0]", "[1,0]", false),
        ("[10,0]", "[[5,5],0]", true),
        ("[0,10]", "[0,[5,5]]", true),
        ("[11,0]", "[[5,6],0]", true),
        ("[12,0]", "[[6,6],0]", true),
    ];

    for (input, expected, applied) in cases {
        let mut n = number(input);
        assert_eq!(n.split(), applied, "{input}");
        assert_eq!(n.to_string(), expected);
        assert_links_consistent(&n);
    }
}

#[test]
fn test_split_picks_leftmost_candidate() {
    let mut n = number("[[3,[15,1]],11]");
    assert!(n.split());
    assert_eq!(n.to_string(), "[[3,[[7,8],1]],11]");
}

#[test]
fn test_split_reuses_exploded_slots() {
    let mut n = number("[[[[[4,3],4],4],[7,[[8,4],9]]],[1,1]]");
    assert!(n.explode());
    let arena_size = n.nodes.len();
    assert_eq!(n.free.len(), 2);

    // [[[[0,7],4],[7,[[8,4],9]]],[1,1]] -> explode [8,4] -> 15 splits
    assert!(n.explode());
    assert!(n.split());
    assert_eq!(n.nodes.len(), arena_size);
    assert_links_consistent(&n);
}

#[test]
fn test_reduce_follows_rewrite_order() {
    let mut n = number("[[[[[4,3],4],4],[7,[[8,4],9]]],[1,1]]");
    let mut steps = Vec::new();
    loop {
        if n.explode() {
            steps.push(format!("explode {n}"));
        } else if n.split() {
            steps.push(format!("split {n}"));
        } else {
            break;
        }
    }

    assert_eq!(
        steps,
        [
            "explode [[[[0,7],4],[7,[[8,4],9]]],[1,1]]",
            "explode [[[[0,7],4],[15,[0,13]]],[1,1]]",
            "split [[[[0,7],4],[[7,8],[0,13]]],[1,1]]",
            "split [[[[0,7],4],[[7,8],[0,[6,7]]]],[1,1]]",
            "explode [[[[0,7],4],[[7,8],[6,0]]],[8,1]]",
        ]
    );
}

#[test]
fn test_full_reduce() {
    let mut n = number("[[[[[4,3],4],4],[7,[[8,4],9]]],[1,1]]");
    n.reduce();
    assert_eq!(n.to_string(), "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
    assert!(n.is_reduced());
    assert_links_consistent(&n);
}

#[test]
fn test_reduce_is_idempotent_on_stable_number() {
    let mut n = number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
    assert!(n.is_reduced());
    n.reduce();
    assert_eq!(n.to_string(), "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
}

#[test]
fn test_magnitude() {
    let cases = [
        ("[9,1]", 29),
        ("[1,9]", 21),
        ("[[9,1],[1,9]]", 129),
        ("[[1,2],[[3,4],5]]", 143),
        ("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]", 1384),
        ("[[[[1,1],[2,2]],[3,3]],[4,4]]", 445),
        ("[[[[3,0],[5,3]],[4,4]],[5,5]]", 791),
        ("[[[[5,0],[7,4]],[5,5]],[6,6]]", 1137),
        ("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]", 3488),
        ("[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]", 4140),
    ];

    for (input, expected) in cases {
        assert_eq!(number(input).magnitude(), expected, "{input}");
    }
}

#[test]
fn test_add_reduces_sum() {
    let sum = number("[[[[4,3],4],4],[7,[[8,4],9]]]") + number("[1,1]");
    assert_eq!(sum.to_string(), "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
    assert_links_consistent(&sum);
}

#[test]
fn test_add_without_reduction() {
    let sum = number("[1,2]").add(number("[[3,4],5]"));
    assert_eq!(sum.to_string(), "[[1,2],[[3,4],5]]");
    assert_links_consistent(&sum);
}

#[test]
fn test_accumulate_starts_from_nothing() {
    // Without a running total the number is returned untouched, even unreduced
    let first = SnailNumber::accumulate(None, number("[[[[[9,8],1],2],3],4]"));
    assert_eq!(first.to_string(), "[[[[[9,8],1],2],3],4]");

    let total = SnailNumber::accumulate(Some(number("[1,1]")), number("[2,2]"));
    assert_eq!(total.to_string(), "[[1,1],[2,2]]");
}

#[test]
fn test_fold_add_sequences() {
    assert_eq!(
        fold_sum(&["[1,1]", "[2,2]", "[3,3]", "[4,4]"]).to_string(),
        "[[[[1,1],[2,2]],[3,3]],[4,4]]"
    );
    assert_eq!(
        fold_sum(&["[1,1]", "[2,2]", "[3,3]", "[4,4]", "[5,5]"]).to_string(),
        "[[[[3,0],[5,3]],[4,4]],[5,5]]"
    );
    assert_eq!(
        fold_sum(&["[1,1]", "[2,2]", "[3,3]", "[4,4]", "[5,5]", "[6,6]"]).to_string(),
        "[[[[5,0],[7,4]],[5,5]],[6,6]]"
    );
}

#[test]
fn test_fold_add_larger_example() {
    let total = fold_sum(&LARGER_EXAMPLE);
    assert_eq!(
        total.to_string(),
        "[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]"
    );
    assert_eq!(total.magnitude(), 3488);
    assert_links_consistent(&total);
}

#[test]
fn test_fold_add_homework() {
    let total = fold_sum(&HOMEWORK);
    assert_eq!(
        total.to_string(),
        "[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]"
    );
    assert_eq!(total.magnitude(), 4140);
}

#[test]
fn test_largest_pairwise_magnitude_of_homework() {
    let numbers: Vec<SnailNumber> = HOMEWORK.iter().map(|line| number(line)).collect();

    let mut best = 0;
    for (i, a) in numbers.iter().enumerate() {
        for (j, b) in numbers.iter().enumerate() {
            if i != j {
                best = best.max((a.clone() + b.clone()).magnitude());
            }
        }
    }

    assert_eq!(best, 3993);
}

#[test]
fn test_structural_equality_ignores_arena_layout() {
    let mut exploded = number("[[[[[9,8],1],2],3],4]");
    exploded.explode();

    assert_eq!(exploded, number("[[[[0,9],2],3],4]"));
    assert_ne!(exploded, number("[[[[0,9],2],3],5]"));
    assert_ne!(number("[[1,2],3]"), number("[1,[2,3]]"));
}
