//! Re-issuance requests.

use reissue_types::{Party, PublicKey, StateRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::asset::AssetCommand;

/// A holder's request that the issuer re-issue one or more assets.
///
/// The request stores references only; the asset snapshots are resolved by
/// the issuer when it accepts and recorded on the resulting lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReissuanceRequest {
    pub issuer: Party,
    pub requester: Party,
    pub asset_refs: Vec<StateRef>,
    pub asset_issuance_command: AssetCommand,
    pub asset_issuance_signers: Vec<Party>,
}

impl ReissuanceRequest {
    pub fn new(
        issuer: Party,
        requester: Party,
        asset_refs: Vec<StateRef>,
        asset_issuance_command: AssetCommand,
        asset_issuance_signers: Vec<Party>,
    ) -> Self {
        Self {
            issuer,
            requester,
            asset_refs,
            asset_issuance_command,
            asset_issuance_signers,
        }
    }

    pub fn participants(&self) -> Vec<Party> {
        vec![self.issuer.clone(), self.requester.clone()]
    }

    pub fn issuance_signer_keys(&self) -> impl Iterator<Item = &PublicKey> {
        self.asset_issuance_signers.iter().map(|p| &p.owning_key)
    }

    pub fn has_duplicate_refs(&self) -> bool {
        let unique: HashSet<&StateRef> = self.asset_refs.iter().collect();
        unique.len() != self.asset_refs.len()
    }
}
