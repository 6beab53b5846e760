//! Integration tests for best-match resolution using the fruit haystack

use std::collections::HashMap;

use best_match::{best, best_func, cmp_lower, needle, MatchError, MatchErrorKind};

const FRUIT: &[&str] = &[
    "Apple",
    "Apples",
    "Bananna",
    "Orange",
    "Pear",
    "Peach",
    "Pineapple",
    "Tomato",
    "Strawberry",
];

const EMPTY: &[&str] = &[];

const SHORT_VALID: &[&str] = &["Apple", "Ban", "Oran", "Pear", "Peac", "Pinea", "Tom", "St"];

const AMBIGUOUS: &[&str] = &["App", "Pea"];

struct Case {
    haystack: &'static [&'static str],
    needles: &'static [&'static str],
    /// Resolved pairs, or the failing needle and error kind
    expected: Result<Vec<(&'static str, &'static str)>, (&'static str, MatchErrorKind)>,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            haystack: EMPTY,
            needles: EMPTY,
            expected: Ok(vec![]),
        },
        Case {
            haystack: FRUIT,
            needles: EMPTY,
            expected: Ok(vec![]),
        },
        Case {
            haystack: EMPTY,
            needles: FRUIT,
            expected: Err(("Apple", MatchErrorKind::NoMatch)),
        },
        Case {
            haystack: FRUIT,
            needles: FRUIT,
            expected: Ok(FRUIT.iter().map(|f| (*f, *f)).collect()),
        },
        Case {
            haystack: FRUIT,
            needles: SHORT_VALID,
            expected: Ok(vec![
                ("Apple", "Apple"),
                ("Ban", "Bananna"),
                ("Oran", "Orange"),
                ("Pear", "Pear"),
                ("Peac", "Peach"),
                ("Pinea", "Pineapple"),
                ("Tom", "Tomato"),
                ("St", "Strawberry"),
            ]),
        },
        Case {
            haystack: FRUIT,
            needles: AMBIGUOUS,
            expected: Err(("App", MatchErrorKind::Ambiguous)),
        },
        // Missing needle first, middle and last
        Case {
            haystack: FRUIT,
            needles: &["Alligator", "Apple", "Ban", "Oran", "Pear", "Peac", "Pinea", "Too", "St"],
            expected: Err(("Alligator", MatchErrorKind::NoMatch)),
        },
        Case {
            haystack: FRUIT,
            needles: &["Apple", "Ban", "Oran", "Pear", "Castle", "Peac", "Pinea", "Too", "St"],
            expected: Err(("Castle", MatchErrorKind::NoMatch)),
        },
        Case {
            haystack: FRUIT,
            needles: &["Apple", "Ban", "Oran", "Pear", "Peac", "Pinea", "Too", "St", "Porpoise"],
            expected: Err(("Too", MatchErrorKind::NoMatch)),
        },
    ]
}

#[test]
fn test_best_cases() {
    for (i, case) in cases().into_iter().enumerate() {
        let actual = best(case.haystack, case.needles);

        match (actual, case.expected) {
            (Ok(resolved), Ok(expected)) => {
                let resolved: HashMap<&str, &str> = resolved
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                let expected: HashMap<&str, &str> = expected.into_iter().collect();
                assert_eq!(resolved, expected, "case {:03}", i);
            }
            (Err(err), Err((needle, kind))) => {
                assert_eq!(err.needle(), needle, "case {:03}", i);
                assert_eq!(err.kind(), kind, "case {:03}", i);
            }
            (Ok(resolved), Err(_)) => panic!("case {:03}: expected error, got {:?}", i, resolved),
            (Err(err), Ok(_)) => panic!(
                "case {:03}: unexpected error: {} (needle = {}, matches = {:?})",
                i,
                err,
                err.needle(),
                err.matches()
            ),
        }
    }
}

#[test]
fn test_best_greek_final_sigma() {
    let haystack = ["ΟΔΟΣΑ", "Apple"];
    let resolved = best(&haystack, &["ΟΔΟΣ", "οδ"]).unwrap();
    assert_eq!(resolved["ΟΔΟΣ"].as_str(), "ΟΔΟΣΑ");
    assert_eq!(resolved["οδ"].index(), 0);
}

#[test]
fn test_ambiguous_fruit() {
    let err = best(FRUIT, AMBIGUOUS).unwrap_err();
    assert_eq!(err.kind(), MatchErrorKind::Ambiguous);
    assert_eq!(err.needle(), "App");
    assert_eq!(err.matches().len(), 2);

    let err = best(FRUIT, &["Pea"]).unwrap_err();
    let names: Vec<&str> = err.matches().iter().map(|m| m.as_str()).collect();
    assert_eq!(names, vec!["Pear", "Peach"]);
}

#[test]
fn test_error_lists_every_candidate() {
    let haystack = ["AB", "ABC", "ABCD", "ABCDE"];

    let err = best(&haystack, &["A"]).unwrap_err();
    assert!(err.is_ambiguous(), "expected multi-match error");
    assert_eq!(err.matches().len(), haystack.len());

    for (m, expected) in err.matches().iter().zip(haystack.iter()) {
        assert_eq!(m.as_str(), *expected);
    }
}

#[test]
fn test_exact_match_precedence() {
    let haystack = ["Rock", "Apple", "Apples"];
    let resolved = best(&haystack, &["Apple"]).unwrap();
    assert_eq!(resolved["Apple"].as_str(), "Apple");
    assert_eq!(resolved["Apple"].index(), 1);

    // Order of the lazy candidates does not matter
    let haystack = ["Apples", "Rock", "Applesauce", "Apple"];
    let resolved = best(&haystack, &["Apple"]).unwrap();
    assert_eq!(resolved["Apple"].index(), 3);
}

#[test]
fn test_single_candidate_wins_without_exact_match() {
    let resolved = best(FRUIT, &["straw"]).unwrap();
    assert_eq!(resolved["straw"].as_str(), "Strawberry");
}

#[test]
fn test_empty_haystack_fails_on_first_needle() {
    let err = best(EMPTY, &["Kiwi", "Lime"]).unwrap_err();
    assert!(matches!(err, MatchError::NoMatch { ref needle } if needle == "Kiwi"));
    assert!(!err.is_ambiguous());
}

#[test]
fn test_custom_comparator_with_needle() {
    let haystack = ["new york", "murray hill", "kyoto", "bejing", "oykot"];

    let anagram = |a: &str, b: &str| {
        let mut a: Vec<char> = a.chars().collect();
        let mut b: Vec<char> = b.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    };
    let matches = needle(&haystack, &anagram, "tokyo");
    assert_eq!(matches.to_strings(), vec!["kyoto", "oykot"]);

    let err = best_func(&haystack, anagram, &["tokyo"]).unwrap_err();
    assert!(err.is_ambiguous());
}

#[test]
fn test_case_insensitive_comparator() {
    let resolved = best_func(FRUIT, cmp_lower, &["tomato", "PEAR"]).unwrap();
    assert_eq!(resolved["tomato"].as_str(), "Tomato");
    assert_eq!(resolved["PEAR"].as_str(), "Pear");

    let err = best_func(FRUIT, cmp_lower, &["Tom"]).unwrap_err();
    assert_eq!(err.kind(), MatchErrorKind::NoMatch);
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_resolved() {
    let resolved = best(FRUIT, &["Ban"]).unwrap();
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Ban": { "index": 2, "value": "Bananna" } })
    );
}
