//! Sets of Unicode scalars, built from classes and explicit members.

use rustc_hash::FxHashSet;

/// A set of Unicode scalars: zero or more broad classes (letters, decimal
/// digits, whitespace) unioned with explicitly listed scalars.
///
/// Class membership is tested through `char`'s classification methods, so a
/// set never materializes the full class; only the explicit members are
/// stored.
#[derive(Debug, Clone, Default)]
pub struct ScalarSet {
    alphabetic: bool,
    digits: bool,
    whitespace: bool,
    scalars: FxHashSet<char>,
}

impl ScalarSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All alphabetic scalars.
    pub fn letters() -> Self {
        Self {
            alphabetic: true,
            ..Self::default()
        }
    }

    /// The ASCII decimal digits `0`-`9`.
    pub fn decimal_digits() -> Self {
        Self {
            digits: true,
            ..Self::default()
        }
    }

    /// Letters and decimal digits.
    pub fn alphanumerics() -> Self {
        Self {
            alphabetic: true,
            digits: true,
            ..Self::default()
        }
    }

    /// All whitespace scalars.
    pub fn whitespace() -> Self {
        Self {
            whitespace: true,
            ..Self::default()
        }
    }

    /// A set holding exactly the scalars of `scalars`.
    pub fn from_scalars(scalars: &str) -> Self {
        Self::new().with_scalars(scalars)
    }

    /// Add the scalars of `scalars` as explicit members.
    pub fn with_scalars(mut self, scalars: &str) -> Self {
        self.scalars.extend(scalars.chars());
        self
    }

    /// The union of this set and `other`.
    pub fn union(mut self, other: ScalarSet) -> Self {
        self.alphabetic |= other.alphabetic;
        self.digits |= other.digits;
        self.whitespace |= other.whitespace;
        self.scalars.extend(other.scalars);
        self
    }

    /// Whether `scalar` is a member of this set.
    #[inline]
    pub fn contains(&self, scalar: char) -> bool {
        (self.alphabetic && scalar.is_alphabetic())
            || (self.digits && scalar.is_ascii_digit())
            || (self.whitespace && scalar.is_whitespace())
            || self.scalars.contains(&scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ScalarSet::new();
        assert!(!set.contains('a'));
        assert!(!set.contains('1'));
    }

    #[test]
    fn test_class_sets() {
        assert!(ScalarSet::letters().contains('a'));
        assert!(ScalarSet::letters().contains('ß'));
        assert!(!ScalarSet::letters().contains('1'));

        assert!(ScalarSet::decimal_digits().contains('7'));
        assert!(!ScalarSet::decimal_digits().contains('x'));

        assert!(ScalarSet::whitespace().contains('\t'));
        assert!(!ScalarSet::whitespace().contains('-'));
    }

    #[test]
    fn test_explicit_scalars_union_classes() {
        let set = ScalarSet::decimal_digits().with_scalars(".,");
        assert!(set.contains('3'));
        assert!(set.contains('.'));
        assert!(set.contains(','));
        assert!(!set.contains('a'));
    }

    #[test]
    fn test_union() {
        let set = ScalarSet::letters().union(ScalarSet::from_scalars("#-"));
        assert!(set.contains('z'));
        assert!(set.contains('#'));
        assert!(set.contains('-'));
        assert!(!set.contains(' '));
    }
}
