//! Kernel utilities shared by every slice: config loading, host parsing,
//! request ID generation, and (behind the `server` feature) the HTTP state
//! and error plumbing.
//!
//! `safe_nanoid!` mints short URL-safe IDs that stay readable when pasted
//! into tickets or logs:
//! ```rust
//! # use ghub_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod host;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

// No I, O, l, 0 or 1; those read ambiguously in most fonts.
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use ghub_domain as domain;
pub use nanoid::nanoid;

/// Generates a `NanoID` over [`SAFE_ALPHABET`]; 12 characters unless a
/// length is given.
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
