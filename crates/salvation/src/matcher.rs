//! Fluent predicate dispatch over a [`Possibly`].
//!
//! ```
//! use salvation::Possibly;
//!
//! let mut seen = Vec::new();
//! Possibly::new(Some(5i32))
//!     .into_matcher()
//!     .case(|v| v.is_some_and(|n| n > 3), |_| seen.push("big"))
//!     .case(|v| v.is_some(), |_| seen.push("any"))
//!     .default(|_| seen.push("none"));
//! assert_eq!(seen, ["big"]);
//! ```

use crate::config::MatcherConfig;
use crate::kind::Classify;
use crate::possibly::Possibly;

/// Chain of `(predicate, action)` cases over one [`Possibly`] subject.
///
/// Cases run in registration order. By default the first case whose
/// predicate holds wins and later cases are skipped without evaluating their
/// predicates; with [`MatcherConfig::evaluate_all_cases`] every predicate runs
/// and every hit fires. An absent subject never reaches any predicate.
#[must_use = "a matcher does nothing until cases are registered"]
#[derive(Debug)]
pub struct Matcher<T> {
    subject: Possibly<T>,
    matched: bool,
    config: MatcherConfig,
}

impl<T: Classify> Matcher<T> {
    pub fn from_possibly(subject: Possibly<T>, config: MatcherConfig) -> Self {
        Self { subject, matched: false, config }
    }

    pub fn case<P, A>(mut self, predicate: P, action: A) -> Self
    where
        P: FnOnce(&T) -> bool,
        A: FnOnce(&T),
    {
        if self.subject.is_absent() {
            return self;
        }
        if self.matched && !self.config.evaluate_all_cases {
            return self;
        }
        let (value, _) = self.subject.reveal();
        if predicate(value) {
            tracing::trace!(all = self.config.evaluate_all_cases, "case matched");
            action(value);
            self.matched = true;
        }
        self
    }

    /// Run `action` with the subject when no case matched, absent subjects included.
    pub fn default<A>(self, action: A)
    where
        A: FnOnce(Possibly<T>),
    {
        if self.matched {
            return;
        }
        tracing::trace!(absent = self.subject.is_absent(), "falling through to default");
        action(self.subject);
    }
}

impl<T> Matcher<T> {
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[inline]
    pub fn subject(&self) -> &Possibly<T> {
        &self.subject
    }

    #[inline]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}
