//! Shared fixtures: a dummy asset and the transactions of a full
//! re-issuance round.

#![allow(dead_code)]

use reissue_attachments::evidence_attachment;
use reissue_contracts::{
    AssetCommand, LockCommand, ReissuableAsset, ReissuanceCommand, ReissuanceLock,
    ReissuanceRequest, ReissuanceState, ReissuanceTransaction, RequestCommand,
};
use reissue_nullables::{NullSaltSource, TestIdentity};
use reissue_transactions::{
    Attachment, SaltSource, SignedTransaction, StateAndRef, TransactionBuilder, TransactionState,
};
use reissue_types::{KeyPair, Party, SecureHash, StateRef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DummyKind {
    Cash,
    Bond,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DummyAsset {
    pub owner: Party,
    pub issuer: Party,
    pub amount: u64,
    pub kind: DummyKind,
}

impl ReissuableAsset for DummyAsset {
    fn participants(&self) -> Vec<Party> {
        vec![self.owner.clone()]
    }

    fn asset_kind(&self) -> &'static str {
        match self.kind {
            DummyKind::Cash => "DummyCash",
            DummyKind::Bond => "DummyBond",
        }
    }
}

pub type State = ReissuanceState<DummyAsset>;
pub type Tx = ReissuanceTransaction<DummyAsset>;
type Builder = TransactionBuilder<State, ReissuanceCommand>;

pub fn issue_command() -> AssetCommand {
    AssetCommand::tagged("Issue")
}

/// One re-issuance round between an issuer, a requester and a notary.
pub struct Scenario {
    pub issuer: TestIdentity,
    pub requester: TestIdentity,
    pub notary: TestIdentity,
    pub originals: Vec<StateAndRef<DummyAsset>>,
    pub issuer_exit_signature: bool,
    salts: NullSaltSource,
}

impl Scenario {
    /// `count` cash assets owned by the requester, recorded by an earlier
    /// transaction this round never sees.
    pub fn new(count: u32) -> Self {
        let issuer = TestIdentity::issuer();
        let requester = TestIdentity::requester();
        let assets = (0..count)
            .map(|i| DummyAsset {
                owner: requester.party(),
                issuer: issuer.party(),
                amount: 100 + u64::from(i),
                kind: DummyKind::Cash,
            })
            .collect();
        Self::with_assets(assets)
    }

    pub fn with_assets(assets: Vec<DummyAsset>) -> Self {
        let notary = TestIdentity::notary();
        let originals = assets
            .into_iter()
            .zip(0u32..)
            .map(|(asset, index)| StateAndRef {
                state: TransactionState::new(asset, notary.party()),
                reference: StateRef::new(SecureHash::new([0xAB; 32]), index),
            })
            .collect();
        Self {
            issuer: TestIdentity::issuer(),
            requester: TestIdentity::requester(),
            notary,
            originals,
            issuer_exit_signature: false,
            salts: NullSaltSource::new(7),
        }
    }

    pub fn requiring_issuer_exit_signature(mut self) -> Self {
        self.issuer_exit_signature = true;
        self
    }

    pub fn finish(&self, builder: Builder) -> Tx {
        builder.finish(self.salts.next_salt()).unwrap()
    }

    pub fn request(&self) -> ReissuanceRequest {
        ReissuanceRequest::new(
            self.issuer.party(),
            self.requester.party(),
            self.originals.iter().map(|o| o.reference).collect(),
            issue_command(),
            vec![self.issuer.party()],
        )
    }

    pub fn lock(&self) -> ReissuanceLock<DummyAsset> {
        let lock = ReissuanceLock::new(
            self.issuer.party(),
            self.requester.party(),
            self.originals.clone(),
        );
        if self.issuer_exit_signature {
            lock.with_issuer_exit_signature()
        } else {
            lock
        }
    }

    pub fn request_builder(&self, request: ReissuanceRequest) -> Builder {
        Builder::new()
            .with_notary(self.notary.party())
            .with_output(TransactionState::new(
                ReissuanceState::Request(request),
                self.notary.party(),
            ))
            .with_command(
                ReissuanceCommand::Request(RequestCommand::Create),
                vec![self.requester.key()],
            )
    }

    pub fn create_request_tx(&self) -> Tx {
        self.finish(self.request_builder(self.request()))
    }

    pub fn reject_tx(&self, create: &Tx) -> Tx {
        self.finish(
            Builder::new()
                .with_notary(self.notary.party())
                .with_input(create.out_ref(0).unwrap())
                .with_command(
                    ReissuanceCommand::Request(RequestCommand::Reject),
                    vec![self.issuer.key()],
                ),
        )
    }

    /// Lock at output 0, replacement `i` at output `i + 1`, chained so each
    /// output is encumbered by the next and the last by the lock.
    pub fn accept_builder(&self, create: &Tx) -> Builder {
        let count = u32::try_from(self.originals.len()).unwrap();
        let notary = self.notary.party();
        let mut builder = Builder::new()
            .with_notary(notary.clone())
            .with_input(create.out_ref(0).unwrap())
            .with_output(
                TransactionState::new(ReissuanceState::Lock(self.lock()), notary.clone())
                    .encumbered_by(1),
            );
        for (i, original) in (0u32..).zip(&self.originals) {
            let next = if i + 1 == count { 0 } else { i + 2 };
            builder = builder.with_output(
                TransactionState::new(
                    ReissuanceState::Asset(original.state.data.clone()),
                    notary.clone(),
                )
                .encumbered_by(next),
            );
        }
        builder
            .with_command(
                ReissuanceCommand::Request(RequestCommand::Accept),
                vec![self.issuer.key()],
            )
            .with_command(
                ReissuanceCommand::Lock(LockCommand::Create),
                vec![self.issuer.key()],
            )
            .with_command(ReissuanceCommand::Asset(issue_command()), vec![self.issuer.key()])
    }

    pub fn accept_tx(&self, create: &Tx) -> Tx {
        self.finish(self.accept_builder(create))
    }

    /// The exit transaction consuming every original with no outputs.
    pub fn exit_evidence(&self, signers: &[&KeyPair]) -> SignedTransaction {
        self.exit_evidence_for(&self.originals, Some(self.notary.party()), signers)
    }

    pub fn exit_evidence_for(
        &self,
        originals: &[StateAndRef<DummyAsset>],
        notary: Option<Party>,
        signers: &[&KeyPair],
    ) -> SignedTransaction {
        let mut builder: TransactionBuilder<DummyAsset, String> = TransactionBuilder::new();
        if let Some(notary) = notary {
            builder = builder.with_notary(notary);
        }
        for original in originals {
            builder = builder.with_input(original.clone());
        }
        let builder = builder.with_command("Exit".to_string(), vec![self.requester.key()]);
        let wire = builder.to_wire(self.salts.next_salt()).unwrap();
        SignedTransaction::sign(wire, signers).unwrap()
    }

    /// Exit evidence signed by the requester and the notary.
    pub fn notarised_exit(&self) -> SignedTransaction {
        self.exit_evidence(&[&self.requester.keys, &self.notary.keys])
    }

    pub fn deactivate_builder(&self, accept: &Tx, attachments: Vec<Attachment>) -> Builder {
        let lock_in = accept.out_ref(0).unwrap();
        let lock_out = lock_in.state.data.as_lock().unwrap().deactivated();
        let notary = self.notary.party();
        let mut builder = Builder::new()
            .with_notary(notary.clone())
            .with_input(lock_in)
            .with_output(TransactionState::new(ReissuanceState::Lock(lock_out), notary.clone()));
        for index in 1..=u32::try_from(self.originals.len()).unwrap() {
            let replacement = accept.out_ref(index).unwrap();
            let released = TransactionState::new(replacement.state.data.clone(), notary.clone());
            builder = builder.with_input(replacement).with_output(released);
        }
        for attachment in attachments {
            builder = builder.with_attachment(attachment);
        }
        builder.with_command(
            ReissuanceCommand::Lock(LockCommand::Deactivate),
            vec![self.requester.key()],
        )
    }

    pub fn deactivate_tx(&self, accept: &Tx, attachments: Vec<Attachment>) -> Tx {
        self.finish(self.deactivate_builder(accept, attachments))
    }

    /// Deactivation carrying the standard notarised exit as evidence.
    pub fn deactivate_with_exit(&self, accept: &Tx) -> Tx {
        let evidence = evidence_attachment(&self.notarised_exit()).unwrap();
        self.deactivate_tx(accept, vec![evidence])
    }

    pub fn delete_builder(&self, accept: &Tx) -> Builder {
        let mut builder = Builder::new()
            .with_notary(self.notary.party())
            .with_input(accept.out_ref(0).unwrap());
        for index in 1..=u32::try_from(self.originals.len()).unwrap() {
            builder = builder.with_input(accept.out_ref(index).unwrap());
        }
        builder.with_command(
            ReissuanceCommand::Lock(LockCommand::Delete),
            vec![self.issuer.key(), self.requester.key()],
        )
    }

    pub fn delete_tx(&self, accept: &Tx) -> Tx {
        self.finish(self.delete_builder(accept))
    }

    /// The create and accept transactions of a fresh round.
    pub fn accepted(&self) -> (Tx, Tx) {
        let create = self.create_request_tx();
        let accept = self.accept_tx(&create);
        (create, accept)
    }
}
