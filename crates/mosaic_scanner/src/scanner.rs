//! The scanning engine.
//!
//! A single left-to-right pass over the decoded input. At each position the
//! matchers are tried in caller order; the first eligible one wins and its
//! token is grown greedily until the matcher stops accepting scalars.
//! Positions no matcher claims are skipped. Matcher order is the sole
//! tie-break, so callers list matchers from most- to least-specific.

use crate::error::ScanError;
use crate::matcher::{Matcher, StartHint};
use crate::token::{KindId, Token};
use mosaic_core::span::ScalarSpan;

/// The scanner walks a decoded scalar sequence and pulls tokens out of it
/// one at a time.
///
/// Most callers use the [`scan`] / [`scan_str`] free functions, which drive
/// a scanner to the end of input. Holding a `Scanner` directly is useful
/// when tokens should be consumed lazily.
pub struct Scanner<'a> {
    /// The decoded input being scanned.
    scalars: &'a [char],
    /// Current position in the input, in scalars.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over a decoded scalar sequence.
    pub fn new(scalars: &'a [char]) -> Self {
        Self { scalars, pos: 0 }
    }

    /// Current position in the input, in scalars. Positions already passed
    /// are covered by an emitted token or were skipped.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the scanner has consumed the whole input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.scalars.len()
    }

    /// Look at the scalar at the current position without advancing.
    #[inline]
    fn current_scalar(&self) -> Option<char> {
        self.scalars.get(self.pos).copied()
    }

    /// Which matcher, if any, may start a token on `scalar`.
    ///
    /// A matcher is eligible iff `can_take(scalar)` holds and
    /// `start_hint(scalar)` is not `Forbidden`; `Required` and
    /// `Unconstrained` are both satisfiable states for the scalar at hand.
    /// The first eligible matcher in list order wins.
    fn eligible_matcher(&self, scalar: char, matchers: &[&dyn Matcher]) -> Option<KindId> {
        matchers.iter().position(|matcher| {
            matcher.can_take(scalar) && matcher.start_hint(scalar) != StartHint::Forbidden
        }).map(KindId)
    }

    /// Scan forward to the next token, consuming any unmatched scalars on
    /// the way. Returns `None` when the rest of the input holds no token.
    pub fn next_token(&mut self, matchers: &[&dyn Matcher]) -> Option<Token> {
        while let Some(scalar) = self.current_scalar() {
            let Some(kind) = self.eligible_matcher(scalar, matchers) else {
                // No matcher may start here; the scalar stays uncovered.
                self.pos += 1;
                continue;
            };

            // Grow the token greedily: keep taking scalars while the winning
            // matcher accepts them. Start hints apply to the first scalar only.
            let matcher = matchers[kind.0];
            let start = self.pos;
            self.pos += 1;
            while !self.is_eof() && matcher.can_take(self.scalars[self.pos]) {
                self.pos += 1;
            }

            let text: String = self.scalars[start..self.pos].iter().collect();
            return Some(Token {
                kind,
                span: ScalarSpan::from_bounds(start as u32, self.pos as u32),
                text,
            });
        }
        None
    }
}

/// Scan a decoded scalar sequence with an ordered, non-empty matcher list.
///
/// Returns the tokens in strictly increasing span order. Scalars no matcher
/// claims produce no token. The scan itself cannot fail; the only error is
/// the contract violation of an empty matcher list, rejected up front.
pub fn scan(scalars: &[char], matchers: &[&dyn Matcher]) -> Result<Vec<Token>, ScanError> {
    if matchers.is_empty() {
        return Err(ScanError::EmptyMatcherList);
    }

    let mut scanner = Scanner::new(scalars);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token(matchers) {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Convenience entry point: decode a string to scalars and scan it.
pub fn scan_str(text: &str, matchers: &[&dyn Matcher]) -> Result<Vec<Token>, ScanError> {
    let scalars: Vec<char> = text.chars().collect();
    scan(&scalars, matchers)
}
