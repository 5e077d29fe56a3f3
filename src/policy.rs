//! Minimum public-key size policy.
//!
//! The policy is an ordinary value handed to public-key import, so different
//! callers (or threads) can apply different minimums without sharing state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// No policy may accept public keys shorter than this many bits.
pub const ABSOLUTE_MIN_PUBLIC_KEY_SIZE: usize = 2048;

/// Recommended minimum public key size, used by [`KeyPolicy::default`].
pub const DEFAULT_MIN_PUBLIC_KEY_SIZE: usize = 4096;

/// Size requirements applied when a public key is imported from PEM or base64.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct KeyPolicy {
    /// Smallest accepted modulus length in bits
    pub min_public_key_size: usize,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            min_public_key_size: DEFAULT_MIN_PUBLIC_KEY_SIZE,
        }
    }
}

impl KeyPolicy {
    /// Create a policy with the given minimum modulus length in bits.
    pub fn new(min_public_key_size: usize) -> Self {
        Self {
            min_public_key_size,
        }
    }

    /// Ensure the configured minimum does not undercut
    /// [`ABSOLUTE_MIN_PUBLIC_KEY_SIZE`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_public_key_size < ABSOLUTE_MIN_PUBLIC_KEY_SIZE {
            warn!(
                min = self.min_public_key_size,
                floor = ABSOLUTE_MIN_PUBLIC_KEY_SIZE,
                "key policy minimum below absolute floor"
            );
            return Err(Error::Configuration(format!(
                "minimum public key size has been set to {}, less than the allowed absolute minimum of {}",
                self.min_public_key_size, ABSOLUTE_MIN_PUBLIC_KEY_SIZE
            )));
        }
        Ok(())
    }

    /// Check a modulus length against the policy.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the policy itself is invalid (checked first),
    /// [`Error::KeyTooShort`] if `bits` is below the configured minimum.
    pub fn check(&self, bits: usize) -> Result<(), Error> {
        self.validate()?;
        if bits < self.min_public_key_size {
            warn!(
                bits,
                min = self.min_public_key_size,
                "rejecting public key below minimum size"
            );
            return Err(Error::KeyTooShort {
                bits,
                min: self.min_public_key_size,
            });
        }
        Ok(())
    }

    /// Load a policy from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the policy as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
