//! Nullable infrastructure for deterministic testing.
//!
//! Randomness in the protocol (privacy salts, key generation) is abstracted so
//! tests can swap in implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the operating system RNG

pub mod identity;
pub mod salt;

pub use identity::TestIdentity;
pub use salt::NullSaltSource;
