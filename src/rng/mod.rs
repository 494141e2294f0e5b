//! Random value generation
//!
//! This module turns bytes from a [`RandomSource`] into the shapes callers
//! ask for: byte vectors, string tokens, bounded integers, bounded floats
//! and UUIDs.
//!
//! Every generator comes in two forms:
//!
//! - a plain function (e.g. [`generate_random_int`]) reading from the
//!   operating system through [`OsRandom`],
//! - a `_from` / `_with` variant taking any [`RandomSource`], used to run
//!   the same logic against a scripted or failing source.
//!
//! All functions are stateless and may be called concurrently.

mod bytes;
mod float;
mod int;
mod source;
mod uuid;

pub use bytes::{
    generate_random_bytes, generate_random_bytes_from, generate_random_string,
    generate_random_string_from,
};
pub use float::{
    generate_random_float, generate_random_float_range, generate_random_float_range_with,
    generate_random_float_with,
};
pub use int::{
    generate_random_int, generate_random_int_from, generate_random_int_range,
    generate_random_int_range_from, rand_max,
};
pub use source::{OsRandom, RandomSource};
pub use self::uuid::{generate_uuid, generate_uuid_bytes, generate_uuid_bytes_from, generate_uuid_from};
