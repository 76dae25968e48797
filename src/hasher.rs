//! Derivation and verification of stored `$S$` hashes.

use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::crypto::{
    Cost, DIGEST_LEN, MAX_PASSWORD_LEN, OsRandom, RandomSource, base64, stretch,
};
use crate::error::HashError;
use crate::format::{FULL_HASH_LEN, HASH_LEN, Scheme, Settings};

/// Where the settings prefix for a derivation comes from.
#[derive(Debug, Clone, Copy)]
pub enum SettingsInput<'a> {
    /// An existing prefix or full stored hash; only the first 12 characters are read.
    Settings(&'a str),
    /// A requested exponent; a fresh salt is drawn and the exponent clamped.
    Exponent(i64),
}

/// Hashes and verifies passwords with a configured cost and salt source.
pub struct PasswordHasher<R = OsRandom> {
    cost: Cost,
    rng: R,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::with_random(OsRandom)
    }
}

impl<R: RandomSource> PasswordHasher<R> {
    pub fn with_random(rng: R) -> Self {
        Self {
            cost: Cost::default(),
            rng,
        }
    }

    /// Sets the exponent used by [`hash`](Self::hash), clamped into range.
    pub fn with_exponent(mut self, exponent: i64) -> Self {
        self.cost = Cost::clamped(exponent);
        self
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Hashes `password` with a fresh salt at the configured cost.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        self.derive(password, SettingsInput::Exponent(self.cost.exponent().into()))
    }

    /// Derives the stored form of `password` for the given settings.
    ///
    /// # Errors
    ///
    /// - [`HashError::InputTooLong`] for passwords over 512 bytes
    /// - [`HashError::MalformedSettings`] for unparsable prefixes or unknown scheme tags
    /// - [`HashError::EncodingInvariant`] if the encoded output has the wrong length
    /// - [`HashError::RandomUnavailable`] if no salt could be drawn
    pub fn derive(&self, password: &str, input: SettingsInput<'_>) -> Result<String, HashError> {
        if password.len() > MAX_PASSWORD_LEN {
            return Err(HashError::InputTooLong {
                len: password.len(),
            });
        }

        let settings = match input {
            SettingsInput::Settings(s) => Settings::decode(s)?,
            SettingsInput::Exponent(e) => Settings::generate(Scheme::Sha512, e, &self.rng)?,
        };

        let digest = match settings.scheme() {
            Some(Scheme::Sha512) => {
                debug!(exponent = settings.cost().exponent(), "deriving sha512 hash");
                stretch(
                    password.as_bytes(),
                    settings.salt().as_bytes(),
                    settings.iterations(),
                )?
            }
            None => return Err(HashError::MalformedSettings("unknown scheme tag")),
        };

        let mut output = settings.to_string();
        output.push_str(&base64::encode(digest.as_slice(), DIGEST_LEN));

        if output.len() != FULL_HASH_LEN {
            warn!(
                expected = FULL_HASH_LEN,
                actual = output.len(),
                "encoded hash length mismatch"
            );
            return Err(HashError::EncodingInvariant {
                expected: FULL_HASH_LEN,
                actual: output.len(),
            });
        }

        output.truncate(HASH_LEN);
        Ok(output)
    }

    /// Checks `password` against a stored hash in constant time.
    ///
    /// Any failure to re-derive, including an unknown scheme, counts as a mismatch.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self.derive(password, SettingsInput::Settings(stored)) {
            Ok(computed) => computed.as_bytes().ct_eq(stored.as_bytes()).into(),
            Err(e) => {
                warn!("cannot verify against stored hash: {e}");
                false
            }
        }
    }

    /// Returns `true` when `stored` should be replaced by a fresh hash.
    ///
    /// That is the case for other schemes, unparsable prefixes and hashes
    /// whose cost differs from the configured one.
    pub fn needs_rehash(&self, stored: &str) -> bool {
        match Settings::decode(stored) {
            Ok(settings) => {
                settings.scheme() != Some(Scheme::Sha512) || settings.cost() != self.cost
            }
            Err(_) => true,
        }
    }
}

/// Iteration exponent of a stored hash, if its prefix parses.
pub fn exponent_of(stored: &str) -> Option<u8> {
    Settings::decode(stored).ok().map(|s| s.cost().exponent())
}
