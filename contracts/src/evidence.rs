//! Proof that a lock's original assets were consumed without successor.
//!
//! Evidence is one or more notarised transactions embedded in the attachments
//! of the deactivating transaction. Together they must consume every original
//! and produce nothing. Each is trusted only after its id has been recomputed
//! from its parts and its notary's signature found.

use reissue_attachments::EvidenceResolver;
use reissue_transactions::{Attachment, SignedTransaction};
use reissue_types::StateRef;
use std::collections::HashSet;
use tracing::debug;

use crate::asset::ReissuableAsset;
use crate::config::EvidencePolicy;
use crate::error::ContractError;
use crate::lock::ReissuanceLock;
use crate::state::ReissuanceTransaction;

pub fn verify_evidence<A: ReissuableAsset>(
    tx: &ReissuanceTransaction<A>,
    lock: &ReissuanceLock<A>,
    resolver: &EvidenceResolver,
    policy: EvidencePolicy,
) -> Result<(), ContractError> {
    let evidence = collect_evidence(&tx.attachments, resolver)?;

    let mut consumed: HashSet<StateRef> = HashSet::new();
    let mut produced = 0usize;
    for stx in &evidence {
        consumed.extend(stx.tx.inputs()?);
        produced += stx.tx.output_count();
    }
    if let Some(missing) = lock
        .original_refs()
        .into_iter()
        .find(|r| !consumed.contains(r))
    {
        return Err(ContractError::MissingEvidence(format!(
            "no evidence transaction consumes original {missing}"
        )));
    }
    if produced != 0 {
        return Err(ContractError::Relational(format!(
            "evidence transactions produce {produced} outputs, originals must be consumed without successor"
        )));
    }

    for stx in &evidence {
        verify_evidence_transaction(stx, tx, lock, policy)?;
    }
    Ok(())
}

/// Resolve every non-contract attachment, keeping those that carry evidence.
fn collect_evidence(
    attachments: &[Attachment],
    resolver: &EvidenceResolver,
) -> Result<Vec<SignedTransaction>, ContractError> {
    let candidates: Vec<&Attachment> = attachments.iter().filter(|a| !a.is_contract()).collect();
    if candidates.is_empty() {
        return Err(ContractError::MissingEvidence(
            "transaction carries no data attachments".to_string(),
        ));
    }

    let mut evidence = Vec::new();
    for attachment in candidates {
        if let Some(stx) = resolver.resolve(attachment)? {
            debug!(attachment = %attachment.id, evidence_tx = %stx.id, "resolved evidence");
            evidence.push(stx);
        }
    }
    if evidence.is_empty() {
        return Err(ContractError::MissingEvidence(
            "no attachment carries a signed transaction".to_string(),
        ));
    }
    Ok(evidence)
}

fn verify_evidence_transaction<A: ReissuableAsset>(
    stx: &SignedTransaction,
    tx: &ReissuanceTransaction<A>,
    lock: &ReissuanceLock<A>,
    policy: EvidencePolicy,
) -> Result<(), ContractError> {
    stx.verify_declared_id()
        .map_err(|e| ContractError::Cryptographic(format!("evidence {}: {e}", stx.id)))?;

    let notary = stx.tx.notary()?.ok_or_else(|| {
        ContractError::Cryptographic(format!("evidence {} declares no notary", stx.id))
    })?;
    if !stx.is_signed_by(&notary.owning_key) {
        return Err(ContractError::Cryptographic(format!(
            "evidence {} is not signed by its notary {notary}",
            stx.id
        )));
    }
    if lock.issuer_is_required_exit_signer && !stx.is_signed_by(&lock.issuer.owning_key) {
        return Err(ContractError::Cryptographic(format!(
            "evidence {} is not signed by issuer {}",
            stx.id, lock.issuer
        )));
    }

    if policy == EvidencePolicy::Strict {
        stx.verify_signatures()
            .map_err(|e| ContractError::Cryptographic(format!("evidence {}: {e}", stx.id)))?;
        match &tx.notary {
            Some(ours) if *ours == notary => {}
            Some(ours) => {
                return Err(ContractError::Cryptographic(format!(
                    "evidence {} was notarised by {notary}, this transaction by {ours}",
                    stx.id
                )))
            }
            None => {
                return Err(ContractError::Cryptographic(
                    "transaction declares no notary to match evidence against".to_string(),
                ))
            }
        }
    }
    Ok(())
}
