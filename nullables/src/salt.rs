//! Nullable salt source: deterministic privacy salts for testing.

use reissue_transactions::{PrivacySalt, SaltSource};
use std::cell::Cell;

/// Hands out distinct, reproducible salts.
///
/// Each salt is the seed byte, a big-endian call counter and a fixed
/// trailing `0x01`, so two sources built with the same seed produce the same
/// sequence and no salt is ever all zero.
pub struct NullSaltSource {
    seed: u8,
    counter: Cell<u64>,
}

impl NullSaltSource {
    pub fn new(seed: u8) -> Self {
        Self {
            seed,
            counter: Cell::new(0),
        }
    }

    /// Number of salts handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

impl Default for NullSaltSource {
    fn default() -> Self {
        Self::new(0xA5)
    }
}

impl SaltSource for NullSaltSource {
    fn next_salt(&self) -> PrivacySalt {
        let n = self.counter.get();
        self.counter.set(n + 1);

        let mut bytes = [0u8; 32];
        bytes[0] = self.seed;
        bytes[8..16].copy_from_slice(&n.to_be_bytes());
        bytes[31] = 0x01;
        match PrivacySalt::new(bytes) {
            Ok(salt) => salt,
            Err(_) => unreachable!("byte 31 is non-zero"),
        }
    }
}
