//! Kernel randomness shim (Linux)
//!
//! Uses the `getrandom` system call, which reads from the same entropy pool
//! as `/dev/urandom` without needing a file descriptor.

use libc::{c_void, getrandom};

/// Fills `buf` with cryptographically secure random bytes from the kernel.
///
/// `getrandom` may return fewer bytes than requested (for example when
/// interrupted by a signal), so the call is repeated until the buffer is
/// full.
///
/// # Panics
/// Panics if the system call reports an error. There is no meaningful way
/// to continue a cryptographic operation without entropy.
pub(crate) fn sys_random(buf: &mut [u8]) {
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
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
