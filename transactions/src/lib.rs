//! Transaction model for the re-issuance protocol.
//!
//! - **Component groups** and the **Merkle reconstructor** that derives a
//!   transaction id from them ([`merkle`])
//! - **Wire / signed transactions**: what gets serialized into evidence
//!   attachments ([`wire`])
//! - **Ledger transactions**: typed, fully-resolved inputs to contract
//!   verification ([`ledger`])
//! - **Builder**: append-only assembly producing finalized transactions
//!   ([`builder`])

pub mod builder;
pub mod component;
pub mod error;
pub mod ledger;
pub mod merkle;
pub mod salt;
pub mod wire;

pub use builder::TransactionBuilder;
pub use component::{ComponentGroup, ComponentGroupEnum};
pub use error::TransactionError;
pub use ledger::{
    Attachment, AttachmentKind, Command, LedgerTransaction, StateAndRef, TransactionState,
};
pub use merkle::{group_roots, merkle_root, reconstruct_id};
pub use salt::{OsSaltSource, PrivacySalt, SaltSource};
pub use wire::{SignedTransaction, TransactionSignature, WireTransaction};
