//! Content-hash type shared by transactions, attachments and Merkle nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SecureHash([u8; 32]);

impl Default for SecureHash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl SecureHash {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Fixed sentinel standing in for component groups that are absent or empty.
    pub const ALL_ONES: Self = Self([0xFFu8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a hash from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHash(e.to_string()))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            TypesError::InvalidHash(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for SecureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureHash({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for SecureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for SecureHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_all_ones() {
        assert!(SecureHash::ALL_ONES.as_bytes().iter().all(|b| *b == 0xFF));
        assert!(!SecureHash::ALL_ONES.is_zero());
    }

    #[test]
    fn display_parses_back() {
        let hash = SecureHash::new([7u8; 32]);
        let parsed: SecureHash = hash.to_string().parse().unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn short_hex_is_rejected() {
        assert!(matches!(
            SecureHash::from_hex("abcd"),
            Err(TypesError::InvalidHash(_))
        ));
    }

    #[test]
    fn debug_is_abbreviated() {
        let hash = SecureHash::new([0xAB; 32]);
        assert_eq!(format!("{hash:?}"), "SecureHash(abababab\u{2026})");
    }
}
