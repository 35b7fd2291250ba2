//! Per-transaction privacy salt.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// 32 random bytes mixed into every component nonce.
///
/// An all-zero salt is rejected at construction and on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct PrivacySalt([u8; 32]);

impl PrivacySalt {
    pub fn new(bytes: [u8; 32]) -> Result<Self, TransactionError> {
        if bytes == [0u8; 32] {
            return Err(TransactionError::ZeroPrivacySalt);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl TryFrom<[u8; 32]> for PrivacySalt {
    type Error = TransactionError;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl From<PrivacySalt> for [u8; 32] {
    fn from(salt: PrivacySalt) -> Self {
        salt.0
    }
}

/// Source of fresh privacy salts.
pub trait SaltSource {
    fn next_salt(&self) -> PrivacySalt;
}

/// Draws salts from the operating system RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn next_salt(&self) -> PrivacySalt {
        loop {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            if let Ok(salt) = PrivacySalt::new(bytes) {
                return salt;
            }
        }
    }
}
