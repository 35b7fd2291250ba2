//! Cryptographic primitives for the re-issuance protocol.
//!
//! - **SHA-256** for component nonces, component leaves, Merkle nodes and
//!   attachment ids
//! - **Ed25519** for transaction signatures (parties and notaries)

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{hash_pair, sha256, sha256_multi};
pub use keys::{generate_keypair, keypair_from_seed, public_from_private};
pub use sign::{sign_hash, sign_message, verify_hash_signature, verify_signature};
