//! Error type shared by every generator in the crate.

use std::io;

use thiserror::Error;

/// Errors returned by the random generators.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system's secure random source failed to deliver the
    /// requested bytes.
    #[error("secure random source failed: {0}")]
    EntropySource(#[from] io::Error),

    /// A range was requested whose lower bound is above its upper bound.
    ///
    /// Also returned for floating-point bounds that cannot be ordered (NaN).
    #[error("MIN value cannot be greater than MAX value.")]
    MinGreaterThanMax,

    /// An exclusive upper bound that must be positive was zero or negative.
    #[error("bound must be positive, got {0}")]
    NonPositiveBound(i64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
