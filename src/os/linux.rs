//! Linux entropy source.
//!
//! Random bytes are read from the kernel through the `getrandom(2)` system
//! call. With no flags set the call draws from the same pool as
//! `/dev/urandom`, but blocks until that pool has been initialized once
//! after boot, so output is never produced from an unseeded pool.

use std::io;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// The system call is repeated until the entire buffer is filled. Partial
/// reads and `EINTR` interruptions are handled transparently.
///
/// # Errors
/// Returns the OS error reported by `getrandom` for any failure other than
/// an interrupted call. The buffer contents are unspecified in that case.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
