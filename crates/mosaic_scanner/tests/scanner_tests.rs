//! Scanner integration tests.
//!
//! Verifies the engine-level guarantees: tokens never overlap, tokens are
//! maximal, start hints are honored, scans are deterministic, and matcher
//! order decides ties without changing which positions get covered.

use mosaic_scanner::{scan_str, Matcher, StartHint, Token};

/// Letters-only token kind.
struct Word;

impl Matcher for Word {
    fn name(&self) -> &str {
        "word"
    }

    fn can_take(&self, scalar: char) -> bool {
        scalar.is_alphabetic()
    }
}

/// Letters-or-digits token kind, overlapping `Word` on letters.
struct Alnum;

impl Matcher for Alnum {
    fn name(&self) -> &str {
        "alnum"
    }

    fn can_take(&self, scalar: char) -> bool {
        scalar.is_alphanumeric()
    }
}

/// Digit-initial number runs that may contain a decimal point.
struct Number;

impl Matcher for Number {
    fn name(&self) -> &str {
        "number"
    }

    fn can_take(&self, scalar: char) -> bool {
        scalar.is_ascii_digit() || scalar == '.'
    }

    fn start_hint(&self, scalar: char) -> StartHint {
        if scalar.is_ascii_digit() {
            StartHint::Required
        } else {
            StartHint::Forbidden
        }
    }
}

/// Helper: scan and return (kind name, text) pairs.
fn scan_named(source: &str, matchers: &[&dyn Matcher]) -> Vec<(String, String)> {
    scan_str(source, matchers)
        .unwrap()
        .into_iter()
        .map(|t| (matchers[t.kind.0].name().to_string(), t.text))
        .collect()
}

/// Helper: assert the engine invariants that must hold for every result.
fn assert_invariants(tokens: &[Token]) {
    for pair in tokens.windows(2) {
        assert!(
            pair[0].span.end() <= pair[1].span.start,
            "tokens overlap or are out of order: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }
    for token in tokens {
        assert!(token.len() >= 1, "empty token emitted: {:?}", token.span);
        assert_eq!(token.text.chars().count() as u32, token.len());
    }
}

#[test]
fn test_tokens_never_overlap() {
    let tokens = scan_str("a1 b2.3 c&d 0.0.1", &[&Number, &Word]).unwrap();
    assert_invariants(&tokens);
}

#[test]
fn test_tokens_are_maximal() {
    let source = "abc12def";
    let tokens = scan_str(source, &[&Number, &Word]).unwrap();
    assert_invariants(&tokens);

    // The scalar just past each token must be rejected by that token's
    // matcher, otherwise the token was not grown far enough.
    let scalars: Vec<char> = source.chars().collect();
    let matchers: [&dyn Matcher; 2] = [&Number, &Word];
    for token in &tokens {
        if let Some(&next) = scalars.get(token.span.end() as usize) {
            assert!(!matchers[token.kind.0].can_take(next));
        }
    }
}

#[test]
fn test_start_legality() {
    // `.` continues a number but must never start one.
    let tokens = scan_named(".5 1.5 .", &[&Number]);
    assert_eq!(
        tokens,
        [
            ("number".to_string(), "5".to_string()),
            ("number".to_string(), "1.5".to_string()),
        ]
    );
}

#[test]
fn test_scan_is_deterministic() {
    let source = "123Hello world&^45.67";
    let first = scan_str(source, &[&Number, &Word]).unwrap();
    let second = scan_str(source, &[&Number, &Word]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_matcher_order_decides_ties() {
    // On letters both matchers are eligible; order picks the winner.
    let preferring_alnum = scan_named("abc123", &[&Alnum, &Word]);
    assert_eq!(
        preferring_alnum,
        [("alnum".to_string(), "abc123".to_string())]
    );

    let preferring_word = scan_named("abc123", &[&Word, &Alnum]);
    assert_eq!(
        preferring_word,
        [
            ("word".to_string(), "abc".to_string()),
            ("alnum".to_string(), "123".to_string()),
        ]
    );
}

#[test]
fn test_reordering_keeps_covered_positions() {
    let source = "a1 b2c? 3d-4 e";
    let one = scan_str(source, &[&Alnum, &Word]).unwrap();
    let other = scan_str(source, &[&Word, &Alnum]).unwrap();

    let covered = |tokens: &[Token]| -> Vec<u32> {
        let mut positions: Vec<u32> = tokens
            .iter()
            .flat_map(|t| t.span.start..t.span.end())
            .collect();
        positions.sort_unstable();
        positions
    };
    assert_eq!(covered(&one), covered(&other));
}

#[test]
fn test_adjacent_tokens_of_different_kinds() {
    // No separator needed between tokens: a kind switch ends the run.
    let tokens = scan_named("12ab34", &[&Number, &Word]);
    assert_eq!(
        tokens,
        [
            ("number".to_string(), "12".to_string()),
            ("word".to_string(), "ab".to_string()),
            ("number".to_string(), "34".to_string()),
        ]
    );
}

#[test]
fn test_unicode_words() {
    let tokens = scan_named("Grüße, 世界 2024", &[&Number, &Word]);
    assert_eq!(
        tokens,
        [
            ("word".to_string(), "Grüße".to_string()),
            ("word".to_string(), "世界".to_string()),
            ("number".to_string(), "2024".to_string()),
        ]
    );
}
