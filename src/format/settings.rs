use std::fmt;

use serde::Serialize;

use super::{SALT_CHARS, SETTINGS_LEN, Scheme};
use crate::crypto::{Cost, RandomSource, SALT_LEN, base64, generate_salt};
use crate::error::HashError;

/// A parsed or freshly generated settings prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(serialize_with = "serialize_tag")]
    tag: u8,
    #[serde(rename = "exponent")]
    cost: Cost,
    salt: String,
}

fn serialize_tag<S: serde::Serializer>(tag: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_char(char::from(*tag))
}

impl Settings {
    /// Builds the prefix for `scheme` from raw salt bytes.
    ///
    /// The exponent is clamped into range rather than rejected.
    pub fn encode(scheme: Scheme, exponent: i64, salt: &[u8; SALT_LEN]) -> Self {
        Self {
            tag: scheme.tag(),
            cost: Cost::clamped(exponent),
            salt: base64::encode(salt, SALT_LEN),
        }
    }

    /// Draws a fresh salt from `rng` and builds a prefix for `scheme`.
    pub fn generate(
        scheme: Scheme,
        exponent: i64,
        rng: &dyn RandomSource,
    ) -> Result<Self, HashError> {
        let salt = generate_salt(rng)?;
        Ok(Self::encode(scheme, exponent, &salt))
    }

    /// Parses the first 12 characters of `input`.
    ///
    /// Anything after the prefix (such as the digest of a stored hash) is
    /// ignored. The scheme tag is not interpreted here.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MalformedSettings`] if:
    /// - the first or third character is not `$`
    /// - the cost character is missing, outside the alphabet or out of range
    /// - the salt is shorter than 8 characters or leaves the alphabet
    pub fn decode(input: &str) -> Result<Self, HashError> {
        let bytes = input.as_bytes();
        let bytes = &bytes[..bytes.len().min(SETTINGS_LEN)];

        if bytes.first() != Some(&b'$') || bytes.get(2) != Some(&b'$') {
            return Err(HashError::MalformedSettings(
                "expected '$' as first and third character",
            ));
        }
        // bytes[1] sits between two ASCII '$', so it is ASCII as well
        let tag = bytes[1];

        let exponent = bytes
            .get(3)
            .and_then(|&c| base64::decode_char(c))
            .ok_or(HashError::MalformedSettings(
                "cost character missing or outside the alphabet",
            ))?;
        let cost = Cost::new(exponent)?;

        let salt = bytes.get(4..).unwrap_or_default();
        if salt.len() != SALT_CHARS {
            return Err(HashError::MalformedSettings("salt must be 8 characters"));
        }
        if !salt.iter().all(|&c| base64::decode_char(c).is_some()) {
            return Err(HashError::MalformedSettings(
                "salt contains characters outside the alphabet",
            ));
        }

        Ok(Self {
            tag,
            cost,
            salt: salt.iter().copied().map(char::from).collect(),
        })
    }

    /// The raw scheme tag character.
    pub fn tag(&self) -> char {
        char::from(self.tag)
    }

    /// The scheme named by the tag, if this crate implements it.
    pub fn scheme(&self) -> Option<Scheme> {
        Scheme::from_tag(self.tag)
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn iterations(&self) -> u64 {
        self.cost.iterations()
    }

    /// The 8-character encoded salt, exactly as it enters the digest.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The 6 raw salt bytes behind the encoded salt.
    pub fn salt_bytes(&self) -> Option<[u8; SALT_LEN]> {
        base64::decode(&self.salt)?.try_into().ok()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}${}{}",
            char::from(self.tag),
            char::from(base64::ALPHABET[usize::from(self.cost.exponent())]),
            self.salt
        )
    }
}
