//! Re-issuance contracts.
//!
//! A holder who lost the only usable copy of an asset asks its issuer to
//! re-issue it. The issuer mints equivalent replacements encumbered by a
//! [`ReissuanceLock`]; the replacements become freely spendable only once the
//! lock is deactivated with proof that the originals were consumed without
//! successor, or are destroyed outright when both parties agree.
//!
//! ```text
//! Request ──Accept──▶ Lock(Active) + encumbered replacements
//!    │                    ├──Deactivate (proof-gated)──▶ Lock(Inactive) + free replacements
//!    │                    └──Delete (issuer + requester)──▶ nothing
//!    └──Reject──▶ nothing
//! ```
//!
//! [`ReissuanceVerifier`] is the entry point.

pub mod asset;
pub mod config;
pub mod error;
pub mod evidence;
pub mod lock;
pub mod lock_contract;
pub mod request;
pub mod request_contract;
mod requirements;
pub mod state;
pub mod verifier;

pub use asset::{AssetCommand, ReissuableAsset};
pub use config::{EvidencePolicy, VerifierConfig};
pub use error::{ConfigError, ContractError};
pub use lock::{LockStatus, ReissuanceLock};
pub use request::ReissuanceRequest;
pub use state::{
    LockCommand, ReissuanceCommand, ReissuanceState, ReissuanceTransaction, RequestCommand,
};
pub use verifier::ReissuanceVerifier;
