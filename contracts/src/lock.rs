//! Re-issuance locks.

use reissue_transactions::StateAndRef;
use reissue_types::{Party, StateRef};
use serde::{Deserialize, Serialize};

use crate::asset::ReissuableAsset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockStatus {
    Active,
    Inactive,
}

/// Binds the original assets to their freshly re-issued replacements.
///
/// Created `Active` together with the encumbered replacements. The only
/// legal transition is to `Inactive`, gated on proof that every original was
/// consumed without successor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReissuanceLock<A> {
    pub issuer: Party,
    pub requester: Party,
    pub original_states: Vec<StateAndRef<A>>,
    pub status: LockStatus,
    /// When set, exit evidence must also carry the issuer's signature.
    pub issuer_is_required_exit_signer: bool,
}

impl<A: ReissuableAsset> ReissuanceLock<A> {
    pub fn new(issuer: Party, requester: Party, original_states: Vec<StateAndRef<A>>) -> Self {
        Self {
            issuer,
            requester,
            original_states,
            status: LockStatus::Active,
            issuer_is_required_exit_signer: false,
        }
    }

    pub fn with_issuer_exit_signature(mut self) -> Self {
        self.issuer_is_required_exit_signer = true;
        self
    }

    pub fn original_refs(&self) -> Vec<StateRef> {
        self.original_states.iter().map(|s| s.reference).collect()
    }

    pub fn is_active(&self) -> bool {
        self.status == LockStatus::Active
    }

    /// This lock with its status set to `Inactive` and nothing else changed.
    pub fn deactivated(&self) -> Self {
        Self {
            status: LockStatus::Inactive,
            ..self.clone()
        }
    }

    pub fn participants(&self) -> Vec<Party> {
        vec![self.issuer.clone(), self.requester.clone()]
    }
}
