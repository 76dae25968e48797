use serde::Serialize;

use crate::error::HashError;

/// Smallest accepted iteration exponent (2^7 rounds).
pub const MIN_EXPONENT: u8 = 7;
/// Largest accepted iteration exponent (2^30 rounds).
pub const MAX_EXPONENT: u8 = 30;
/// Exponent used when the caller does not pick one.
pub const DEFAULT_EXPONENT: u8 = 15;

/// Iteration cost of a hash, stored as the base-2 exponent of the round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cost(u8);

impl Default for Cost {
    fn default() -> Self {
        Self(DEFAULT_EXPONENT)
    }
}

impl Cost {
    /// Validated constructor, used when parsing stored settings.
    pub fn new(exponent: u8) -> Result<Self, HashError> {
        let cost = Self(exponent);
        cost.validate()?;
        Ok(cost)
    }

    /// Clamps any requested exponent into the accepted range.
    ///
    /// Used at generation time so an out-of-range request still yields a
    /// usable hash instead of an error.
    pub fn clamped(exponent: i64) -> Self {
        let clamped = exponent.clamp(i64::from(MIN_EXPONENT), i64::from(MAX_EXPONENT));
        Self(clamped as u8)
    }

    pub fn exponent(&self) -> u8 {
        self.0
    }

    /// Number of stretching rounds after the initial digest.
    pub fn iterations(&self) -> u64 {
        1u64 << self.0
    }

    pub fn validate(&self) -> Result<(), HashError> {
        if self.0 < MIN_EXPONENT {
            return Err(HashError::MalformedSettings("iteration exponent below 7"));
        }
        if self.0 > MAX_EXPONENT {
            return Err(HashError::MalformedSettings("iteration exponent above 30"));
        }
        Ok(())
    }
}
