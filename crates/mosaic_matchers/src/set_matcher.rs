//! Matchers driven by scalar sets.

use crate::scalar_set::ScalarSet;
use mosaic_scanner::{Matcher, StartHint};

/// A named token kind defined by a continuation set and an optional start
/// set.
///
/// Without a start set, any scalar in the continuation set may begin a
/// token. With one, scalars inside the start set are [`StartHint::Required`]
/// and scalars outside it are [`StartHint::Forbidden`]: tokens of this kind
/// can only ever begin on a start-set scalar. Note that the start set does
/// not widen the continuation set; a scalar that should both begin and
/// extend tokens must be in the continuation set too.
#[derive(Debug, Clone)]
pub struct SetMatcher {
    name: String,
    take: ScalarSet,
    start: Option<ScalarSet>,
}

impl SetMatcher {
    /// A matcher whose tokens are runs of scalars from `take`.
    pub fn new(name: impl Into<String>, take: ScalarSet) -> Self {
        Self {
            name: name.into(),
            take,
            start: None,
        }
    }

    /// Restrict which scalars tokens of this kind may start on.
    pub fn with_start(mut self, start: ScalarSet) -> Self {
        self.start = Some(start);
        self
    }
}

impl Matcher for SetMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_take(&self, scalar: char) -> bool {
        self.take.contains(scalar)
    }

    fn start_hint(&self, scalar: char) -> StartHint {
        match &self.start {
            Some(start) if start.contains(scalar) => StartHint::Required,
            Some(_) => StartHint::Forbidden,
            None => StartHint::Unconstrained,
        }
    }
}
