//! Kernel randomness shim (macOS)
//!
//! Uses `arc4random_buf`, which is seeded and continuously reseeded by the
//! kernel and is the documented interface for cryptographic-quality random
//! bytes on this platform. It cannot fail.

use libc::arc4random_buf;

/// Fills `buf` with cryptographically secure random bytes from the system.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
}
