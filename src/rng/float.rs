//! Random floating-point numbers with 24 bits of resolution.
//!
//! A fraction is obtained from two independent integer draws `r1` and `r2`
//! in `[0, max_int_range)`:
//!
//! ```text
//! frac = (((r1 << 15) + r2) & (2^24 - 1)) / 2^24
//! ```
//!
//! which always lies in `[0, 1)`. The bound of the integer draws comes from
//! a [`FloatConfig`]; the plain functions use [`FloatConfig::DEFAULT`].

use crate::config::FloatConfig;
use crate::error::{Error, Result};
use crate::rng::int::uniform_below;
use crate::rng::source::{OsRandom, RandomSource};

const FRACTION_BITS: u32 = 24;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
const FRACTION_SCALE: f64 = (1u64 << FRACTION_BITS) as f64;

fn fraction24<S: RandomSource + ?Sized>(source: &mut S, config: &FloatConfig) -> Result<f64> {
    config.validate()?;

    let bound = config.max_int_range as u64;
    let r1 = uniform_below(source, bound)?;
    let r2 = uniform_below(source, bound)?;

    let bits = (r1 << 15).wrapping_add(r2) & FRACTION_MASK;
    Ok(bits as f64 / FRACTION_SCALE)
}

/// Returns a random float in `[0, 1)`.
///
/// # Errors
/// [`Error::EntropySource`] if either underlying draw fails.
pub fn generate_random_float() -> Result<f64> {
    generate_random_float_with(&mut OsRandom, &FloatConfig::DEFAULT)
}

/// Same as [`generate_random_float`], reading from `source` with the given
/// draw configuration.
///
/// # Errors
/// Also returns [`Error::NonPositiveBound`] if `config` does not validate.
pub fn generate_random_float_with<S: RandomSource + ?Sized>(
    source: &mut S,
    config: &FloatConfig,
) -> Result<f64> {
    fraction24(source, config)
}

/// Returns a random float in `[low, high)`.
///
/// The result is `low + frac * (high - low)`. When `low == high`, `high` is
/// returned without consuming randomness. Bounds are expected to be finite.
///
/// # Errors
/// - [`Error::MinGreaterThanMax`] if `low > high` or either bound is NaN.
/// - [`Error::EntropySource`] if either underlying draw fails.
pub fn generate_random_float_range(low: f64, high: f64) -> Result<f64> {
    generate_random_float_range_with(&mut OsRandom, low, high, &FloatConfig::DEFAULT)
}

/// Same as [`generate_random_float_range`], reading from `source` with the
/// given draw configuration.
pub fn generate_random_float_range_with<S: RandomSource + ?Sized>(
    source: &mut S,
    low: f64,
    high: f64,
    config: &FloatConfig,
) -> Result<f64> {
    // Written this way so that NaN bounds are rejected as well.
    if !(low <= high) {
        return Err(Error::MinGreaterThanMax);
    }
    if low == high {
        return Ok(high);
    }

    let frac = fraction24(source, config)?;
    let span = high - low;
    let value = if span.is_finite() {
        low + frac * span
    } else {
        // high - low overflowed; interpolate without forming the span.
        low * (1.0 - frac) + high * frac
    };

    // Rounding can land exactly on `high` for very narrow ranges.
    if value < high { Ok(value) } else { Ok(low) }
}
