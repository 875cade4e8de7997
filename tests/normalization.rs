use recommend_core::matching::{matches, normalize, split_phrases, OverlapMatcher};
use recommend_core::types::Pantry;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Chicken Breast",
    "EXTRA-virgin olive oil (cold pressed)",
    "crème fraîche",
    "2 cups\tbrown rice\n",
    "!!!",
    "Sea  Salt,  Black Pepper",
    "ÅÄÖ 123 æøå",
    "tab\tand\r\nnewline",
];

#[test]
fn normalize_is_idempotent_and_ascii_only() {
    for raw in SAMPLES {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        assert!(
            once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
            "unexpected character in {once:?}"
        );
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
    }
}

#[test]
fn splitting_is_the_callers_job() {
    assert_eq!(normalize("salt, pepper"), "salt pepper");
    let phrases: Vec<String> = split_phrases("salt, pepper").collect();
    assert_eq!(phrases, vec!["salt", "pepper"]);
}

#[test]
fn match_follows_overlap_ratio_definition() {
    let cases: &[(&str, &[&str], bool)] = &[
        ("sea salt", &["salt"], true),
        ("olive oil", &["vegetable oil"], false),
        ("olive oil", &["extra virgin olive oil"], true),
        ("chicken breast", &["chicken thighs"], false),
        ("greek yogurt", &["yogurt"], true),
        ("red lentils", &["lentils", "red onion"], true),
        ("canned tomatoes", &["tomato"], false),
        ("", &["anything"], false),
    ];

    for (candidate, query, expected) in cases {
        let pantry = Pantry::from_items(query.iter().copied());
        assert_eq!(
            matches(candidate, &pantry),
            *expected,
            "candidate {candidate:?} against {query:?}"
        );
    }
}

#[test]
fn boundary_ratio_of_exactly_threshold_matches() {
    let candidate = "one two three six seven eight";

    // overlap 3, min(6, 5) = 5
    let pantry = Pantry::from_items(["one two three nine ten"]);
    assert!(matches(candidate, &pantry));

    // overlap 2, min(6, 5) = 5
    let pantry = Pantry::from_items(["one two nine ten eleven"]);
    assert!(!matches(candidate, &pantry));

    let ratio = OverlapMatcher::overlap_ratio("a b c d e", "a b c x y").unwrap();
    assert!(ratio >= OverlapMatcher::default().threshold());
}
