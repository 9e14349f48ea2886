//! Constructors for the common token kinds.

use crate::scalar_set::ScalarSet;
use crate::set_matcher::SetMatcher;
use mosaic_scanner::{Matcher, StartHint};
use unicode_xid::UnicodeXID;

/// Number runs: digits with embedded `.`, starting on a digit only, so
/// `45.67` is one token but a leading `.` never opens one.
pub fn number() -> SetMatcher {
    SetMatcher::new("number", ScalarSet::decimal_digits().with_scalars("."))
        .with_start(ScalarSet::decimal_digits())
}

/// Word runs: maximal runs of letters.
pub fn word() -> SetMatcher {
    SetMatcher::new("word", ScalarSet::letters())
}

/// Whitespace runs.
pub fn whitespace() -> SetMatcher {
    SetMatcher::new("whitespace", ScalarSet::whitespace())
}

/// `#`-prefixed codes such as `#YF-1942-B`: alphanumerics and `-` after a
/// mandatory leading `#`. The `#` is part of the continuation set so the
/// emitted token keeps its prefix, but the start set pins it to first place.
pub fn hash_format() -> SetMatcher {
    SetMatcher::new(
        "hash-format",
        ScalarSet::alphanumerics().with_scalars("-#"),
    )
    .with_start(ScalarSet::from_scalars("#"))
}

/// Identifier runs in the Unicode XID sense, plus the usual `_`.
pub fn identifier() -> IdentifierMatcher {
    IdentifierMatcher
}

/// Identifier-shaped tokens: XID start/continue scalars, so `x1` is one
/// identifier while `1x` is digit noise followed by one.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierMatcher;

impl Matcher for IdentifierMatcher {
    fn name(&self) -> &str {
        "identifier"
    }

    fn can_take(&self, scalar: char) -> bool {
        scalar == '_' || UnicodeXID::is_xid_continue(scalar)
    }

    fn start_hint(&self, scalar: char) -> StartHint {
        if scalar == '_' || UnicodeXID::is_xid_start(scalar) {
            StartHint::Required
        } else {
            StartHint::Forbidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_scanner::scan_str;

    fn texts(source: &str, matchers: &[&dyn Matcher]) -> Vec<String> {
        scan_str(source, matchers)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_number_takes_embedded_dot() {
        assert_eq!(texts("45.67 .5 9.", &[&number()]), ["45.67", "5", "9."]);
    }

    #[test]
    fn test_word_is_letters_only() {
        assert_eq!(texts("ab1cd", &[&word()]), ["ab", "cd"]);
    }

    #[test]
    fn test_whitespace_runs() {
        let tokens = scan_str("a \t b", &[&whitespace()]).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, " \t ");
    }

    #[test]
    fn test_identifier_shape() {
        assert_eq!(texts("1x _y z2", &[&identifier()]), ["x", "_y", "z2"]);
    }
}
