//! Rules for transactions consuming or producing a [`ReissuanceLock`].
//!
//! | Command      | Lock in        | Lock out        | Assets                               | Signers            |
//! |--------------|----------------|-----------------|--------------------------------------|--------------------|
//! | `Create`     | none           | one, `Active`   | replacements out, encumbered         | issuer             |
//! | `Deactivate` | one, `Active`  | one, `Inactive` | encumbered in, unencumbered out      | requester          |
//! | `Delete`     | one, `Active`  | none            | encumbered in, one per original      | issuer, requester  |
//!
//! `Deactivate` additionally requires proof that every original asset was
//! consumed without successor; see [`crate::evidence`].

use reissue_attachments::EvidenceResolver;
use reissue_transactions::{Command, StateAndRef};
use reissue_types::Party;
use std::collections::HashSet;
use tracing::debug;

use crate::asset::ReissuableAsset;
use crate::config::EvidencePolicy;
use crate::error::ContractError;
use crate::evidence::verify_evidence;
use crate::lock::ReissuanceLock;
use crate::request::ReissuanceRequest;
use crate::requirements::{
    require_count, require_relational, require_signer, require_signers, require_structural,
    single, single_command,
};
use crate::state::{LockCommand, ReissuanceCommand, ReissuanceTransaction};

pub fn verify_lock<A: ReissuableAsset>(
    tx: &ReissuanceTransaction<A>,
    resolver: &EvidenceResolver,
    policy: EvidencePolicy,
) -> Result<(), ContractError> {
    let (command, signed) = single_command("lock", tx.commands_of(|c| c.as_lock()))?;
    debug!(tx = %tx.id, ?command, "verifying lock transition");

    match command {
        LockCommand::Create => verify_create(tx, signed),
        LockCommand::Deactivate => {
            let lock = verify_deactivate(tx, signed)?;
            verify_evidence(tx, lock, resolver, policy)
        }
        LockCommand::Delete => verify_delete(tx, signed),
    }
}

fn verify_create<A: ReissuableAsset>(
    tx: &ReissuanceTransaction<A>,
    signed: &Command<ReissuanceCommand>,
) -> Result<(), ContractError> {
    let (_, request) = single("request input", tx.inputs_of(|s| s.as_request()))?;
    require_count(
        "request outputs when creating a lock",
        tx.outputs_of(|s| s.as_request()).len(),
        0,
    )?;
    require_count(
        "lock inputs when creating a lock",
        tx.inputs_of(|s| s.as_lock()).len(),
        0,
    )?;
    let (_, _, lock) = single("lock output", tx.outputs_of(|s| s.as_lock()))?;
    require_count(
        "asset inputs when creating a lock",
        tx.inputs_of(|s| s.as_asset()).len(),
        0,
    )?;

    require_structural(lock.is_active(), || "new lock must be active".to_string())?;
    require_structural(!lock.original_states.is_empty(), || {
        "lock must record at least one original asset".to_string()
    })?;
    require_relational(lock.issuer == request.issuer, || {
        format!("lock issuer {} differs from request issuer {}", lock.issuer, request.issuer)
    })?;
    require_relational(lock.requester == request.requester, || {
        format!(
            "lock requester {} differs from request requester {}",
            lock.requester, request.requester
        )
    })?;
    require_signer(signed, "issuer", &lock.issuer)?;
    require_relational(lock.original_refs() == request.asset_refs, || {
        "lock originals must be exactly the requested assets, in order".to_string()
    })?;
    verify_originals(&lock.original_states)?;

    let replacements = tx.outputs_of(|s| s.as_asset());
    require_structural(!replacements.is_empty(), || {
        "at least one replacement asset must be issued".to_string()
    })?;
    require_count(
        "replacement assets",
        replacements.len(),
        lock.original_states.len(),
    )?;
    for (index, state, _) in &replacements {
        let target = state.encumbrance.and_then(|e| usize::try_from(e).ok());
        require_structural(
            matches!(target, Some(t) if t < tx.outputs.len() && t != *index),
            || format!("replacement output {index} must be encumbered by another output"),
        )?;
    }
    for ((index, _, data), original) in replacements.iter().zip(&lock.original_states) {
        require_relational(*data == &original.state.data, || {
            format!(
                "replacement output {index} differs from original {}",
                original.reference
            )
        })?;
    }

    verify_issuance_command(tx, request)
}

/// Originals must share one participant set and one asset kind, and none may
/// already be encumbered.
fn verify_originals<A: ReissuableAsset>(
    originals: &[StateAndRef<A>],
) -> Result<(), ContractError> {
    let Some((first, rest)) = originals.split_first() else {
        return Err(ContractError::Structural(
            "lock must record at least one original asset".to_string(),
        ));
    };
    let participants: HashSet<Party> = first.state.data.participants().into_iter().collect();
    let kind = first.state.data.asset_kind();

    for original in rest {
        let theirs: HashSet<Party> = original.state.data.participants().into_iter().collect();
        require_relational(theirs == participants, || {
            format!(
                "original {} has different participants from {}",
                original.reference, first.reference
            )
        })?;
        require_relational(original.state.data.asset_kind() == kind, || {
            format!(
                "original {} is a {}, expected {kind}",
                original.reference,
                original.state.data.asset_kind()
            )
        })?;
    }
    for original in originals {
        require_relational(!original.state.is_encumbered(), || {
            format!("original {} is encumbered", original.reference)
        })?;
    }
    Ok(())
}

fn verify_issuance_command<A>(
    tx: &ReissuanceTransaction<A>,
    request: &ReissuanceRequest,
) -> Result<(), ContractError> {
    let issuance = tx
        .commands_of(|c| c.as_asset())
        .into_iter()
        .find(|(c, _)| **c == request.asset_issuance_command);
    let Some((_, command)) = issuance else {
        return Err(ContractError::Structural(format!(
            "transaction must carry the requested issuance command {:?}",
            request.asset_issuance_command.tag
        )));
    };
    require_signers(command, "asset issuance", request.issuance_signer_keys())
}

/// Checks the shape of a deactivation and returns the consumed lock.
fn verify_deactivate<'a, A: ReissuableAsset>(
    tx: &'a ReissuanceTransaction<A>,
    signed: &Command<ReissuanceCommand>,
) -> Result<&'a ReissuanceLock<A>, ContractError> {
    let (_, lock_in) = single("lock input", tx.inputs_of(|s| s.as_lock()))?;
    let (_, _, lock_out) = single("lock output", tx.outputs_of(|s| s.as_lock()))?;
    require_relational(lock_in.is_active(), || {
        "only an active lock can be deactivated".to_string()
    })?;
    require_relational(!lock_out.is_active(), || {
        "deactivated lock must be inactive".to_string()
    })?;
    require_relational(*lock_out == lock_in.deactivated(), || {
        "deactivated lock must equal its input apart from status".to_string()
    })?;
    require_count(
        "request states when deactivating",
        tx.inputs_of(|s| s.as_request()).len() + tx.outputs_of(|s| s.as_request()).len(),
        0,
    )?;

    let asset_inputs = tx.inputs_of(|s| s.as_asset());
    let asset_outputs = tx.outputs_of(|s| s.as_asset());
    require_structural(!asset_inputs.is_empty(), || {
        "at least one replacement asset must be released".to_string()
    })?;
    require_count("asset outputs", asset_outputs.len(), asset_inputs.len())?;
    require_signer(signed, "requester", &lock_in.requester)?;

    for (input, _) in &asset_inputs {
        require_structural(input.state.is_encumbered(), || {
            format!("asset input {} must be encumbered", input.reference)
        })?;
    }
    for (index, output, _) in &asset_outputs {
        require_structural(!output.is_encumbered(), || {
            format!("released asset output {index} must not be encumbered")
        })?;
    }

    let inputs: Vec<&A> = asset_inputs.iter().map(|(_, a)| *a).collect();
    let outputs: Vec<&A> = asset_outputs.iter().map(|(_, _, a)| *a).collect();
    require_relational(same_multiset(&inputs, &outputs), || {
        "released assets must equal the consumed replacements".to_string()
    })?;
    Ok(lock_in)
}

fn verify_delete<A: ReissuableAsset>(
    tx: &ReissuanceTransaction<A>,
    signed: &Command<ReissuanceCommand>,
) -> Result<(), ContractError> {
    let (lock_input, lock) = single("lock input", tx.inputs_of(|s| s.as_lock()))?;
    require_relational(lock.is_active(), || {
        "only an active lock can be deleted".to_string()
    })?;
    require_count("outputs when deleting a lock", tx.outputs.len(), 0)?;
    require_count(
        "request inputs when deleting a lock",
        tx.inputs_of(|s| s.as_request()).len(),
        0,
    )?;
    require_structural(!lock.original_states.is_empty(), || {
        "lock records no original assets".to_string()
    })?;

    let assets = tx.inputs_of(|s| s.as_asset());
    require_count(
        "asset inputs when deleting a lock",
        assets.len(),
        lock.original_states.len(),
    )?;
    for (input, _) in &assets {
        require_structural(
            input.state.is_encumbered() && input.reference.tx_id == lock_input.reference.tx_id,
            || {
                format!(
                    "asset input {} must be encumbered alongside lock {}",
                    input.reference, lock_input.reference
                )
            },
        )?;
    }

    require_signer(signed, "issuer", &lock.issuer)?;
    require_signer(signed, "requester", &lock.requester)
}

/// Equal as multisets: same length and every left item matched by a distinct
/// right item.
fn same_multiset<T: PartialEq>(left: &[&T], right: &[&T]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut unmatched: Vec<&T> = right.to_vec();
    left.iter().all(|l| match unmatched.iter().position(|r| r == l) {
        Some(i) => {
            unmatched.swap_remove(i);
            true
        }
        None => false,
    })
}
