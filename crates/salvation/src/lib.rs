//! salvation: `Possibly<T>`, an optional wrapper that decides absence from the
//! wrapped type's representation kind, and `Matcher<T>`, fluent case dispatch
//! over it.

pub mod config;
pub mod error;
pub mod kind;
pub mod matcher;
pub mod possibly;

pub use config::{MatcherConfig, PossiblyConfig};
pub use error::{Error, Result};
pub use kind::{classify_absent, Classify, Kind};
pub use matcher::Matcher;
pub use possibly::Possibly;
