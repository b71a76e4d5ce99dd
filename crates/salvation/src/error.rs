//! Error type shared by [`Possibly`](crate::Possibly) operations.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs a setting the instance was not built with.
    #[error("configuration error: {0}")]
    Configuration(&'static str),
    /// The wrapped value classified as absent.
    #[error("attempted to unwrap Nothing value")]
    ValueAbsent,
}

pub type Result<T> = core::result::Result<T, Error>;
