//! Parameters for the two-draw float construction.
//!
//! Random floats are built from two bounded integer draws. The exclusive
//! upper bound of those draws used to be a hidden constant; it is exposed
//! here so callers and tests can substitute their own value.

use crate::error::{Error, Result};

/// Configuration of the 24-bit fraction generator.
///
/// Each call to a float generator draws two integers from
/// `[0, max_int_range)` and folds them into a 24-bit fraction:
///
/// ```text
/// ((r1 << 15) + r2) & (2^24 - 1)
/// ```
///
/// The default bound is `999_999`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatConfig {
    /// Exclusive upper bound of each integer draw.
    pub max_int_range: i64,
}

impl FloatConfig {
    /// The configuration used by [`generate_random_float`] and
    /// [`generate_random_float_range`].
    ///
    /// [`generate_random_float`]: crate::generate_random_float
    /// [`generate_random_float_range`]: crate::generate_random_float_range
    pub const DEFAULT: Self = Self {
        max_int_range: 999_999,
    };

    /// Checks that each draw has at least two possible outcomes.
    pub fn validate(&self) -> Result<()> {
        if self.max_int_range < 2 {
            return Err(Error::NonPositiveBound(self.max_int_range));
        }

        Ok(())
    }
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
