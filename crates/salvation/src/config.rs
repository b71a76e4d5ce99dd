//! Construction-time settings for [`Possibly`](crate::Possibly) and [`Matcher`](crate::Matcher).
//!
//! Both structs deserialize from partial documents: missing fields take their
//! `Default` values.

use serde::{Deserialize, Serialize};

/// Controls how a [`Possibly`](crate::Possibly) decides whether its value is absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct PossiblyConfig {
    /// Classify once at construction and answer every query from the cache.
    ///
    /// If the wrapped value can change behind the container's back (a `Weak`
    /// whose last strong owner is dropped, a raw pointer whose target is
    /// freed), the cache goes stale until
    /// [`recompute_classification`](crate::Possibly::recompute_classification)
    /// is called.
    pub precompute: bool,
    /// Count a sequence in its zero state (no elements, no allocation) as present.
    ///
    /// Only affects [`Kind::Sequence`](crate::Kind::Sequence).
    pub treat_empty_container_as_present: bool,
}

impl PossiblyConfig {
    pub const fn new() -> Self {
        Self { precompute: false, treat_empty_container_as_present: false }
    }

    pub const fn with_precompute(mut self, precompute: bool) -> Self {
        self.precompute = precompute;
        self
    }

    pub const fn with_empty_container_as_present(mut self, present: bool) -> Self {
        self.treat_empty_container_as_present = present;
        self
    }
}

/// Evaluation strategy for a [`Matcher`](crate::Matcher).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Run every case whose predicate holds instead of stopping at the first.
    pub evaluate_all_cases: bool,
}

impl MatcherConfig {
    pub const fn new() -> Self {
        Self { evaluate_all_cases: false }
    }

    pub const fn with_evaluate_all_cases(mut self, all: bool) -> Self {
        self.evaluate_all_cases = all;
        self
    }
}
