//! Salted, iterated SHA-512 password hashes in the legacy `$S$` format.
//!
//! A stored hash is a 12-character settings prefix (scheme tag, cost
//! character and encoded salt) followed by the crypt-style base64 encoding
//! of the stretched digest, truncated to 55 characters.

pub mod crypto;
mod error;
pub mod format;
mod hasher;

pub use crate::crypto::{
    Cost, DEFAULT_EXPONENT, MAX_EXPONENT, MIN_EXPONENT, OsRandom, RandomSource,
};
pub use crate::error::HashError;
pub use crate::format::{Scheme, Settings};
pub use crate::hasher::{PasswordHasher, SettingsInput, exponent_of};

/// Hashes `password` with a fresh salt and `2^exponent` rounds.
///
/// The exponent is clamped to 7..=30. Returns `None` if the password is
/// longer than 512 bytes or the hash could not be produced; callers must not
/// store anything in that case.
pub fn hash_password(password: &str, exponent: i64) -> Option<String> {
    PasswordHasher::new()
        .derive(password, SettingsInput::Exponent(exponent))
        .ok()
}

/// Checks `password` against a hash previously returned by [`hash_password`].
pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHasher::new().verify(password, stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let stored = hash_password("pw", 7).unwrap();
        assert!(verify_password("pw", &stored));
        assert!(!verify_password("pw2", &stored));
    }

    #[test]
    fn every_exponent_in_range_is_encoded() {
        // only the prefix is checked; higher exponents are too slow to hash here
        for exponent in MIN_EXPONENT..=MAX_EXPONENT {
            let settings =
                Settings::encode(Scheme::Sha512, exponent.into(), &[1, 2, 3, 4, 5, 6]);
            assert_eq!(exponent_of(&settings.to_string()), Some(exponent));
        }
    }

    #[test]
    fn hash_password_clamps_exponent() {
        let stored = hash_password("pw", 2).unwrap();
        assert_eq!(exponent_of(&stored), Some(MIN_EXPONENT));
        assert!(verify_password("pw", &stored));
    }

    #[test]
    fn too_long_password_yields_nothing() {
        assert!(hash_password(&"x".repeat(513), 7).is_none());
        assert!(hash_password(&"x".repeat(512), 7).is_some());
    }

    #[test]
    fn verify_never_falls_back() {
        assert!(!verify_password("pw", "pw"));
        assert!(!verify_password("", ""));
        assert!(!verify_password("pw", "$P$Babcdefgh0123456789"));
    }

    #[test]
    fn hashing_in_parallel() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let pw = format!("pw{i}");
                    let stored = hash_password(&pw, 7).unwrap();
                    (pw, stored)
                })
            })
            .collect();

        for handle in handles {
            let (pw, stored) = handle.join().unwrap();
            assert!(verify_password(&pw, &stored));
        }
    }
}
