//! Random byte sequences and URL-safe string tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::error::Result;
use crate::rng::source::{OsRandom, RandomSource};

/// Returns `n` securely generated random bytes.
///
/// # Errors
/// [`Error::EntropySource`](crate::Error::EntropySource) if the OS random
/// source fails. No bytes are returned in that case.
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>> {
    generate_random_bytes_from(&mut OsRandom, n)
}

/// Same as [`generate_random_bytes`], reading from `source`.
pub fn generate_random_bytes_from<S: RandomSource + ?Sized>(
    source: &mut S,
    n: usize,
) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; n];
    if n > 0 {
        source.fill_bytes(&mut bytes)?;
    }
    Ok(bytes)
}

/// Returns a URL-safe, base64 encoded string of `s` random bytes.
///
/// The alphabet is `A-Z a-z 0-9 - _` with `=` padding, so the result is
/// `ceil(s / 3) * 4` characters long. Thirty-two bytes give a 44 character
/// token.
///
/// # Errors
/// [`Error::EntropySource`](crate::Error::EntropySource) if the OS random
/// source fails.
pub fn generate_random_string(s: usize) -> Result<String> {
    generate_random_string_from(&mut OsRandom, s)
}

/// Same as [`generate_random_string`], reading from `source`.
pub fn generate_random_string_from<S: RandomSource + ?Sized>(
    source: &mut S,
    s: usize,
) -> Result<String> {
    let bytes = generate_random_bytes_from(source, s)?;
    Ok(URL_SAFE.encode(bytes))
}
