//! `Possibly<T>`: a value paired with its present/absent classification.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::config::{MatcherConfig, PossiblyConfig};
use crate::error::{Error, Result};
use crate::kind::{classify_absent, Classify};
use crate::matcher::Matcher;

/// Wraps a value of type `T` and classifies it as present or absent.
///
/// Absence follows the value's [`Kind`](crate::Kind): `None`, null raw
/// pointers, dead `Weak`s and zero-state containers are absent, while plain
/// values such as numbers and strings are always present.
///
/// The cache is only written through `&mut self`, so a shared `Possibly`
/// can be read from several threads but never recomputed concurrently with
/// those reads.
///
/// Equality and hashing look at the value and the config, never the cache.
#[derive(Clone, Debug)]
pub struct Possibly<T> {
    value: T,
    absent_cached: bool,
    config: PossiblyConfig,
}

impl<T: Classify> Possibly<T> {
    pub fn new(value: T) -> Self {
        Self::with_config(value, PossiblyConfig::default())
    }

    /// Wrap `value`, classifying it immediately when `config.precompute` is set.
    pub fn with_config(value: T, config: PossiblyConfig) -> Self {
        let mut p = Self { value, absent_cached: false, config };
        if config.precompute {
            p.refresh();
        }
        p
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        if self.config.precompute {
            return self.absent_cached;
        }
        classify_absent(&self.value, self.config.treat_empty_container_as_present)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Re-run classification and overwrite the cache.
    ///
    /// Errors with [`Error::Configuration`] when the instance was built
    /// without `precompute`; such instances already classify on every query.
    pub fn recompute_classification(&mut self) -> Result<()> {
        if !self.config.precompute {
            tracing::debug!("recompute requested on uncached Possibly");
            return Err(Error::Configuration("caching not enabled"));
        }
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.absent_cached = classify_absent(&self.value, self.config.treat_empty_container_as_present);
        tracing::trace!(
            kind = ?self.value.kind(),
            absent = self.absent_cached,
            "cached classification"
        );
    }

    /// The value and whether it is present.
    pub fn extract(self) -> (T, bool) {
        let present = self.is_present();
        (self.value, present)
    }

    /// Borrowing form of [`extract`](Self::extract).
    pub fn reveal(&self) -> (&T, bool) {
        (&self.value, self.is_present())
    }

    /// The value, for call sites that already know it is present.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[track_caller]
    pub fn extract_or_panic(self) -> T {
        if self.is_absent() {
            panic!("attempted to unwrap Nothing value");
        }
        self.value
    }

    pub fn extract_or_error(&self) -> Result<&T> {
        if self.is_absent() {
            return Err(Error::ValueAbsent);
        }
        Ok(&self.value)
    }

    pub fn extract_or(self, default: T) -> T {
        if self.is_absent() {
            return default;
        }
        self.value
    }

    pub fn into_option(self) -> Option<T> {
        if self.is_absent() {
            return None;
        }
        Some(self.value)
    }

    /// Start a first-match [`Matcher`] over this value.
    pub fn into_matcher(self) -> Matcher<T> {
        self.into_matcher_with(MatcherConfig::default())
    }

    pub fn into_matcher_with(self, config: MatcherConfig) -> Matcher<T> {
        Matcher::from_possibly(self, config)
    }
}

impl<T> Possibly<T> {
    /// Whether absence is answered from the construction-time cache.
    #[inline]
    pub fn is_precomputed(&self) -> bool {
        self.config.precompute
    }

    #[inline]
    pub fn config(&self) -> &PossiblyConfig {
        &self.config
    }
}

impl<T: Classify + fmt::Display> Possibly<T> {
    /// `<Nothing>` when absent, `<Something: {value}>` otherwise.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: Classify + fmt::Debug> Possibly<T> {
    /// Like [`Possibly::describe`], rendering the value with `{:?}`.
    ///
    /// Works for every std nilable kind (`Vec`, maps, `Weak`, raw pointers).
    pub fn describe_debug(&self) -> String {
        if self.is_absent() {
            return String::from("<Nothing>");
        }
        format!("<Something: {:?}>", self.value)
    }
}

impl<T: fmt::Display> Possibly<Option<T>> {
    /// Like [`Possibly::describe`], rendering the value inside `Some`.
    pub fn describe_inner(&self) -> String {
        match (self.is_absent(), &self.value) {
            (false, Some(v)) => format!("<Something: {v}>"),
            _ => String::from("<Nothing>"),
        }
    }
}

impl<T: PartialEq> PartialEq for Possibly<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.config == other.config
    }
}

impl<T: Eq> Eq for Possibly<T> {}

impl<T: Hash> Hash for Possibly<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.config.hash(state);
    }
}

impl<T: Classify + fmt::Display> fmt::Display for Possibly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            return f.write_str("<Nothing>");
        }
        write!(f, "<Something: {}>", self.value)
    }
}

impl<T: Classify> From<T> for Possibly<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Classify> From<Possibly<T>> for Option<T> {
    fn from(p: Possibly<T>) -> Self {
        p.into_option()
    }
}
