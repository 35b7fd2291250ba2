//! Fundamental types for the re-issuance protocol.
//!
//! Every other crate in the workspace builds on these: content hashes, key
//! material, party identities and the state references that point at ledger
//! records.

pub mod error;
pub mod hash;
pub mod keys;
pub mod party;
pub mod state_ref;

pub use error::TypesError;
pub use hash::SecureHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use party::Party;
pub use state_ref::StateRef;
