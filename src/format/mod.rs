//! Stored hash format.
//!
//! ```text
//! $ TAG $ COST (1) | SALT (8) | DIGEST (43, truncated)
//! ```
//!
//! The 12-character settings prefix is handled by [`Settings`]; the tag
//! selects the hashing [`Scheme`].

pub mod settings;

pub use settings::Settings;

use crate::crypto::{DIGEST_LEN, base64};

/// Length of the settings prefix.
pub const SETTINGS_LEN: usize = 12;
/// Number of encoded salt characters in the prefix.
pub const SALT_CHARS: usize = 8;
/// Length of the untruncated output: prefix plus the encoded digest.
pub const FULL_HASH_LEN: usize = SETTINGS_LEN + base64::encoded_len(DIGEST_LEN);
/// Length of a stored hash.
pub const HASH_LEN: usize = 55;

/// Hashing schemes identified by the tag between the first two `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Iterated SHA-512, tag `S`.
    Sha512,
}

impl Scheme {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'S' => Some(Scheme::Sha512),
            _ => None,
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            Scheme::Sha512 => b'S',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Sha512 => "sha512",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_length_matches_formula() {
        assert_eq!(FULL_HASH_LEN, 12 + (8 * 64usize).div_ceil(6));
        assert_eq!(FULL_HASH_LEN, 98);
    }

    #[test]
    fn only_sha512_tag_is_known() {
        assert_eq!(Scheme::from_tag(b'S'), Some(Scheme::Sha512));
        assert_eq!(Scheme::Sha512.tag(), b'S');
        for tag in [b'H', b'P', b'2', b'U', b's'] {
            assert_eq!(Scheme::from_tag(tag), None);
        }
    }
}
