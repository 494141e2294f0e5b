//! Secure randomness helpers
//!
//! This crate provides small, stateless helpers that turn bytes from the
//! operating system's cryptographically secure random source into commonly
//! needed shapes:
//!
//! - [`generate_random_bytes`]: `n` raw random bytes
//! - [`generate_random_string`]: a URL-safe base64 token
//! - [`generate_random_int`] / [`generate_random_int_range`]: unbiased
//!   bounded integers
//! - [`generate_random_float`] / [`generate_random_float_range`]: floats
//!   with 24 bits of resolution
//! - [`generate_uuid`]: RFC 4122 version 4 UUIDs
//! - [`rand_max`]: the unbiased modulo reduction limit for a given modulus
//!
//! No entropy is collected, pooled or expanded here. Each call reads fresh
//! bytes from the OS and returns; there is no shared state, so every
//! function is safe to call from many threads at once.
//!
//! # Module overview
//!
//! - `os`
//!   Platform access to the secure random source (`getrandom` on Linux,
//!   `arc4random_buf` on macOS, `BCryptGenRandom` on Windows).
//!
//! - `rng`
//!   The generators, and the [`RandomSource`] trait they read through.
//!
//! - `config`
//!   [`FloatConfig`], the parameters of the float construction.
//!
//! - `error`
//!   The crate-wide [`Error`] type.
//!
//! # Example
//!
//! ```rust, ignore
//! let token = srand::generate_random_string(32)?;
//! assert_eq!(token.len(), 44);
//!
//! let roll = srand::generate_random_int_range(1, 7)?;
//! assert!((1..7).contains(&roll));
//! ```

mod os;

pub mod config;
pub mod error;
pub mod rng;

pub use config::FloatConfig;
pub use error::{Error, Result};
pub use rng::*;
