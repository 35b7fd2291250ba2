//! Entry point: dispatch a transaction to the contracts it touches.

use rayon::prelude::*;
use reissue_attachments::EvidenceResolver;
use reissue_utils::OutcomeCounter;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::{debug, debug_span, warn};

use crate::asset::ReissuableAsset;
use crate::config::VerifierConfig;
use crate::error::ContractError;
use crate::lock_contract::verify_lock;
use crate::request_contract::verify_request;
use crate::state::{ReissuanceState, ReissuanceTransaction};

const OUTCOMES: &[&str] = &[
    "verified",
    "structural",
    "relational",
    "cryptographic",
    "missing_evidence",
    "unsupported_command",
    "attachment",
    "transaction",
];

/// Verifies re-issuance transactions over asset type `A`.
///
/// Holds no mutable state besides outcome counters, so one verifier can be
/// shared across threads.
pub struct ReissuanceVerifier<A> {
    config: VerifierConfig,
    resolver: EvidenceResolver,
    outcomes: OutcomeCounter,
    _asset: PhantomData<fn() -> A>,
}

impl<A: ReissuableAsset> ReissuanceVerifier<A> {
    pub fn new(config: VerifierConfig) -> Self {
        let resolver = EvidenceResolver::new(
            config.evidence_entry_prefix.clone(),
            config.max_evidence_entry_bytes,
        );
        Self {
            config,
            resolver,
            outcomes: OutcomeCounter::new(OUTCOMES),
            _asset: PhantomData,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify one transaction. Any broken rule rejects it outright.
    pub fn verify(&self, tx: &ReissuanceTransaction<A>) -> Result<(), ContractError> {
        let span = debug_span!("verify", tx = %tx.id);
        let _enter = span.enter();

        let result = self.dispatch(tx);
        match &result {
            Ok(()) => {
                debug!("transaction verified");
                self.outcomes.record("verified");
            }
            Err(e) => {
                warn!(kind = e.kind(), reason = %e, "transaction rejected");
                self.outcomes.record(e.kind());
            }
        }
        result
    }

    /// Verify independent transactions in parallel, one result per input.
    pub fn verify_batch(
        &self,
        txs: &[ReissuanceTransaction<A>],
    ) -> Vec<Result<(), ContractError>>
    where
        A: Send + Sync,
    {
        txs.par_iter().map(|tx| self.verify(tx)).collect()
    }

    /// Outcome counts since construction, keyed by "verified" or the
    /// rejection kind.
    pub fn outcomes(&self) -> BTreeMap<&'static str, u64> {
        self.outcomes.snapshot()
    }

    fn dispatch(&self, tx: &ReissuanceTransaction<A>) -> Result<(), ContractError> {
        let states = || {
            tx.inputs
                .iter()
                .map(|i| &i.state.data)
                .chain(tx.outputs.iter().map(|o| &o.data))
        };
        let has_request = states().any(|s| matches!(s, ReissuanceState::Request(_)));
        let has_lock = states().any(|s| matches!(s, ReissuanceState::Lock(_)));
        debug!(has_request, has_lock, "dispatching");

        if !has_request && !has_lock {
            return Err(ContractError::UnsupportedCommand(
                "transaction carries no request or lock state".to_string(),
            ));
        }
        if !has_request && tx.commands.iter().any(|c| c.value.as_request().is_some()) {
            return Err(ContractError::UnsupportedCommand(
                "request command without a request state".to_string(),
            ));
        }
        if !has_lock && tx.commands.iter().any(|c| c.value.as_lock().is_some()) {
            return Err(ContractError::UnsupportedCommand(
                "lock command without a lock state".to_string(),
            ));
        }

        if has_request {
            verify_request(tx)?;
        }
        if has_lock {
            verify_lock(tx, &self.resolver, self.config.evidence_policy)?;
        }
        Ok(())
    }
}
