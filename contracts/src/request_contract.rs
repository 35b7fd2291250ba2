//! Rules for transactions consuming or producing a [`ReissuanceRequest`].
//!
//! - `Create`: a requester files a new request.
//! - `Accept`: the issuer consumes the request; the lock contract checks the
//!   lock and replacements created alongside.
//! - `Reject`: the issuer consumes the request with no successor.

use tracing::debug;

use crate::asset::ReissuableAsset;
use crate::error::ContractError;
use crate::request::ReissuanceRequest;
use crate::requirements::{
    require_count, require_relational, require_signer, require_structural, single, single_command,
};
use crate::state::{ReissuanceTransaction, RequestCommand};

pub fn verify_request<A: ReissuableAsset>(
    tx: &ReissuanceTransaction<A>,
) -> Result<(), ContractError> {
    let (command, signed) = single_command("request", tx.commands_of(|c| c.as_request()))?;
    debug!(tx = %tx.id, ?command, "verifying request transition");

    let request_inputs = tx.inputs_of(|s| s.as_request());
    let request_outputs = tx.outputs_of(|s| s.as_request());

    match command {
        RequestCommand::Create => {
            require_count("inputs when creating a request", tx.inputs.len(), 0)?;
            require_count("outputs when creating a request", tx.outputs.len(), 1)?;
            let (_, _, request) = single("request output", request_outputs)?;
            verify_request_fields(request)?;
            require_signer(signed, "requester", &request.requester)
        }
        RequestCommand::Accept => {
            let (_, request) = single("request input", request_inputs)?;
            require_count("request outputs when accepting", request_outputs.len(), 0)?;
            let locks = tx.outputs_of(|s| s.as_lock());
            require_count("lock outputs when accepting", locks.len(), 1)?;
            require_signer(signed, "issuer", &request.issuer)
        }
        RequestCommand::Reject => {
            require_count("inputs when rejecting", tx.inputs.len(), 1)?;
            let (_, request) = single("request input", request_inputs)?;
            require_count("outputs when rejecting", tx.outputs.len(), 0)?;
            require_signer(signed, "issuer", &request.issuer)
        }
    }
}

fn verify_request_fields(request: &ReissuanceRequest) -> Result<(), ContractError> {
    require_relational(request.issuer != request.requester, || {
        format!("issuer and requester must differ, both are {}", request.issuer)
    })?;
    require_structural(!request.asset_refs.is_empty(), || {
        "request must name at least one asset".to_string()
    })?;
    require_structural(!request.has_duplicate_refs(), || {
        "request names the same asset more than once".to_string()
    })
}
