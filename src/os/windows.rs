//! Kernel randomness shim (Windows)
//!
//! Uses the CNG primitive `BCryptGenRandom` with the system-preferred RNG,
//! the supported interface for cryptographic random bytes on Windows.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills `buf` with cryptographically secure random bytes from the system.
///
/// # Panics
/// Panics if the underlying call reports a non-zero NTSTATUS. Such a
/// failure indicates a broken operating system configuration.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        panic!("BCryptGenRandom failed with status {status}");
    }
}
