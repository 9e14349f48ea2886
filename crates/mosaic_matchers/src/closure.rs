//! Closure-backed matchers for one-off rules.

use mosaic_scanner::{Matcher, StartHint};

/// A matcher defined by closures, for rules too ad hoc to deserve a type.
pub struct FnMatcher {
    name: String,
    can_take: Box<dyn Fn(char) -> bool + Send + Sync>,
    start_hint: Option<Box<dyn Fn(char) -> StartHint + Send + Sync>>,
}

impl FnMatcher {
    /// A matcher whose tokens are runs of scalars accepted by `can_take`.
    pub fn new(
        name: impl Into<String>,
        can_take: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            can_take: Box::new(can_take),
            start_hint: None,
        }
    }

    /// Supply a start-hint rule; without one every start is unconstrained.
    pub fn with_start_hint(
        mut self,
        start_hint: impl Fn(char) -> StartHint + Send + Sync + 'static,
    ) -> Self {
        self.start_hint = Some(Box::new(start_hint));
        self
    }
}

impl Matcher for FnMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_take(&self, scalar: char) -> bool {
        (self.can_take)(scalar)
    }

    fn start_hint(&self, scalar: char) -> StartHint {
        match &self.start_hint {
            Some(hint) => hint(scalar),
            None => StartHint::Unconstrained,
        }
    }
}
