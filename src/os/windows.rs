//! Windows entropy source.

use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer using the system-preferred `BCryptGenRandom` provider.
///
/// Buffers larger than `u32::MAX` bytes are filled in chunks, since the API
/// takes a 32-bit length.
///
/// # Errors
/// A non-zero `NTSTATUS` is returned as an [`io::Error`] carrying the
/// status code.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(io::Error::other(format!(
                "BCryptGenRandom failed with status {status:#x}"
            )));
        }
    }

    Ok(())
}
