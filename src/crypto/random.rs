use super::SALT_LEN;
use crate::error::HashError;

/// Source of the salt bytes.
///
/// Implementations must be safe to share across threads; the default
/// [`OsRandom`] asks the operating system on every call.
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError>;
}

/// Cryptographically secure randomness from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError> {
        getrandom::fill(buf).map_err(|_| HashError::RandomUnavailable)
    }
}

/// Generate salt
pub fn generate_salt(rng: &dyn RandomSource) -> Result<[u8; SALT_LEN], HashError> {
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)?;
    Ok(salt)
}
