//! Bounded random integers.
//!
//! All integer generation funnels through [`uniform_below`], which draws
//! uniformly from `[0, bound)` by rejection sampling:
//!
//! 1. take the bit length `k` of `bound - 1`,
//! 2. read `ceil(k / 8)` bytes from the source and keep the low `k` bits,
//! 3. accept the candidate if it is below `bound`, otherwise draw again.
//!
//! Since `2^k < 2 * bound`, each attempt is accepted with probability above
//! one half. Every value in range is equally likely; there is no modulo
//! bias.

use log::trace;

use crate::error::{Error, Result};
use crate::rng::source::{OsRandom, RandomSource};

const TWO_POW_63: u64 = 1 << 63;

/// Draws a uniform value from `[0, bound)`.
///
/// `bound` must be non-zero. A bound of one consumes no randomness.
pub(crate) fn uniform_below<S: RandomSource + ?Sized>(source: &mut S, bound: u64) -> Result<u64> {
    debug_assert!(bound > 0, "uniform_below called with a zero bound");

    let max = bound - 1;
    let bits = u64::BITS - max.leading_zeros();
    if bits == 0 {
        return Ok(0);
    }

    let len = bits.div_ceil(8) as usize;
    let mask = u64::MAX >> (u64::BITS - bits);
    let mut buf = [0u8; 8];

    loop {
        source.fill_bytes(&mut buf[8 - len..])?;
        let candidate = u64::from_be_bytes(buf) & mask;

        if candidate < bound {
            return Ok(candidate);
        }

        trace!("rejected candidate {candidate} for bound {bound}");
    }
}

/// Returns a uniformly distributed integer in `[0, n)`.
///
/// # Errors
/// - [`Error::NonPositiveBound`] if `n <= 0`. No randomness is consumed.
/// - [`Error::EntropySource`] if the OS random source fails.
pub fn generate_random_int(n: i64) -> Result<i64> {
    generate_random_int_from(&mut OsRandom, n)
}

/// Same as [`generate_random_int`], reading from `source`.
pub fn generate_random_int_from<S: RandomSource + ?Sized>(source: &mut S, n: i64) -> Result<i64> {
    if n <= 0 {
        return Err(Error::NonPositiveBound(n));
    }

    Ok(uniform_below(source, n as u64)? as i64)
}

/// Returns a uniformly distributed integer in `[low, high)`.
///
/// When `low == high` the range holds a single value and `high` is returned
/// without touching the random source. The whole `i64` domain is supported:
/// `generate_random_int_range(i64::MIN, i64::MAX)` does not overflow.
///
/// # Errors
/// - [`Error::MinGreaterThanMax`] if `low > high`.
/// - [`Error::EntropySource`] if the OS random source fails.
pub fn generate_random_int_range(low: i64, high: i64) -> Result<i64> {
    generate_random_int_range_from(&mut OsRandom, low, high)
}

/// Same as [`generate_random_int_range`], reading from `source`.
pub fn generate_random_int_range_from<S: RandomSource + ?Sized>(
    source: &mut S,
    low: i64,
    high: i64,
) -> Result<i64> {
    if low > high {
        return Err(Error::MinGreaterThanMax);
    }
    if low == high {
        return Ok(high);
    }

    // high > low, so the two's complement difference is the exact span.
    let span = high.wrapping_sub(low) as u64;
    let offset = uniform_below(source, span)?;

    Ok(low.wrapping_add(offset as i64))
}

/// Returns the largest value below `2^63` that keeps a draw over `2^63`
/// outcomes unbiased when reduced modulo `n`:
/// `(2^63 - 1) - (2^63 mod n)`.
///
/// Pure; consumes no randomness.
///
/// # Panics
/// Panics if `n <= 0`.
pub fn rand_max(n: i64) -> i64 {
    assert!(n > 0, "rand_max requires a positive modulus, got {n}");

    ((TWO_POW_63 - 1) - TWO_POW_63 % n as u64) as i64
}
