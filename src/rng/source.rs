//! Sources of secure random bytes.
//!
//! Every generator in this crate reads its randomness through the
//! [`RandomSource`] trait. Production code uses [`OsRandom`], which reads
//! straight from the operating system. Nothing is buffered or expanded: each
//! request is a fresh read from the OS.

use log::warn;

use crate::error::Result;
use crate::os::sys_random;

/// A supplier of cryptographically secure random bytes.
///
/// Implementations must either fill the whole buffer or return an error.
/// A partially filled buffer must never be reported as success.
pub trait RandomSource {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

/// The operating system's secure random source.
///
/// This is a zero-sized handle: it holds no state, and any number of
/// instances may be used concurrently from different threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        sys_random(buf).map_err(|err| {
            warn!("OS random source failed to fill {} bytes: {err}", buf.len());
            err.into()
        })
    }
}
