//! Symmetric encryption algorithms.
//!
//! Currently includes SM4 (GB/T 32907) in CBC mode with PKCS#7 padding.

pub mod sm4;

/// Re-export of the SM4-CBC cipher context.
pub use sm4::core::Sm4;

/// Re-export of the SM4 error type.
pub use sm4::core::Sm4Error;
