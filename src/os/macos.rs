//! macOS entropy source.

use std::io;

use libc::{arc4random_buf, c_void};

/// Fills a buffer with random bytes from `arc4random_buf`.
///
/// On macOS `arc4random_buf` is backed by the kernel CSPRNG and cannot fail,
/// so this never returns an error. The `Result` keeps the signature uniform
/// across platforms.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }
    Ok(())
}
