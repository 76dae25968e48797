//! Cryptographic building blocks for the `$S$` scheme.
//!
//! Provides the crypt-style base64 codec, the iteration cost, the salt
//! randomness source and the SHA-512 stretching loop.

pub mod base64;
pub mod cost;
pub mod random;
pub mod stretch;

pub use cost::{Cost, DEFAULT_EXPONENT, MAX_EXPONENT, MIN_EXPONENT};
pub use random::{OsRandom, RandomSource, generate_salt};
pub use stretch::stretch;

/// Number of raw salt bytes drawn per hash (6 bytes / 8 encoded characters).
pub const SALT_LEN: usize = 6;
/// Length of the SHA-512 digest (64 bytes / 512 bits).
pub const DIGEST_LEN: usize = 64;
/// Longest password accepted, in bytes.
pub const MAX_PASSWORD_LEN: usize = 512;
