//! The matcher contract: a stateless rule describing one token kind.

/// A matcher's opinion on whether a scalar may begin a token of its kind.
///
/// `Required` and `Forbidden` are per-scalar verdicts, not global ones: a
/// matcher that returns `Required` for digits and `Forbidden` for everything
/// else restricts its tokens to digit-initial runs, while a matcher that
/// returns `Unconstrained` everywhere lets any continuable scalar start a
/// token. This is an explicit tri-state rather than `Option<bool>` so that
/// "no constraint" can never be confused with "constraint not met".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartHint {
    /// The scalar is one the kind is allowed (and expected) to start on.
    Required,
    /// The scalar must not begin a token of this kind.
    Forbidden,
    /// The matcher has no opinion; `can_take` alone decides.
    Unconstrained,
}

/// A rule defining one kind of token.
///
/// Matchers answer two per-scalar questions: may this scalar extend a token
/// already in progress (`can_take`), and may it be the very first scalar of
/// one (`start_hint`). Implementations must be stateless and deterministic:
/// the scanner may query the same scalar any number of times, in any order,
/// and relies on getting the same answer each time.
pub trait Matcher {
    /// A stable identifier for this token kind, used when inspecting or
    /// displaying scan results.
    fn name(&self) -> &str;

    /// Whether `scalar` may extend a token of this kind.
    fn can_take(&self, scalar: char) -> bool;

    /// Whether `scalar` may begin a token of this kind. Defaults to
    /// [`StartHint::Unconstrained`] for every scalar, meaning any scalar
    /// accepted by `can_take` may also start a token.
    fn start_hint(&self, _scalar: char) -> StartHint {
        StartHint::Unconstrained
    }
}
