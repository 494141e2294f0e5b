//! RFC 4122 version 4 UUIDs.

use uuid::Uuid;

use crate::error::Result;
use crate::rng::source::{OsRandom, RandomSource};

/// Returns a random UUID as a lowercase, hyphenated string such as
/// `"0b5c5d3e-7f2a-4c1d-9e8f-112233445566"`.
///
/// The version nibble is always `4` and the variant nibble is one of
/// `8`, `9`, `a` or `b`.
///
/// # Errors
/// [`Error::EntropySource`](crate::Error::EntropySource) if sixteen bytes
/// cannot be read from the OS random source.
pub fn generate_uuid() -> Result<String> {
    generate_uuid_from(&mut OsRandom)
}

/// Same as [`generate_uuid`], reading from `source`.
pub fn generate_uuid_from<S: RandomSource + ?Sized>(source: &mut S) -> Result<String> {
    let bytes = generate_uuid_bytes_from(source)?;
    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}

/// Returns the sixteen raw bytes of a random version 4 UUID.
pub fn generate_uuid_bytes() -> Result<[u8; 16]> {
    generate_uuid_bytes_from(&mut OsRandom)
}

/// Same as [`generate_uuid_bytes`], reading from `source`.
pub fn generate_uuid_bytes_from<S: RandomSource + ?Sized>(source: &mut S) -> Result<[u8; 16]> {
    let mut bytes = [0u8; 16];
    source.fill_bytes(&mut bytes)?;

    // variant 10xx xxxx
    bytes[8] = (bytes[8] & !0xc0) | 0x80;
    // version 4
    bytes[6] = (bytes[6] & !0xf0) | 0x40;

    Ok(bytes)
}
