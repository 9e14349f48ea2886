//! Token records produced by the scanner.

use mosaic_core::span::ScalarSpan;
use serde::Serialize;

/// Identifies which matcher produced a token: the index of that matcher in
/// the list the caller passed to [`scan`](crate::scan).
///
/// Index-based identity keeps tokens free of borrows into the matcher list;
/// callers resolve a `KindId` back to a matcher (or its
/// [`name`](crate::Matcher::name)) by indexing the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KindId(pub usize);

/// A token: a maximal contiguous run of scalars accepted by one matcher.
///
/// Tokens are created by the scanner and never mutated; the span is always
/// at least one scalar long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Which matcher produced this token.
    pub kind: KindId,
    /// The run of input scalars this token covers.
    pub span: ScalarSpan,
    /// The materialized text of the token.
    pub text: String,
}

impl Token {
    /// The scalar index where this token starts.
    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// The length of this token in scalars.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.length
    }

    /// Always false: the scanner never emits empty tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
