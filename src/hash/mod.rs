//! Hash algorithms exposed by the crate.
//!
//! Currently includes SM3 (GB/T 32905) with a pure-Rust implementation.

pub mod sm3;

/// Re-export of the one-shot SM3 convenience function.
pub use sm3::core::sm3;

/// Re-export of the streaming SM3 context.
pub use sm3::core::Sm3;
