//! Fully-resolved transactions handed to contract verification.

use reissue_crypto::sha256;
use reissue_types::{Party, PublicKey, SecureHash, StateRef};
use serde::{Deserialize, Serialize};

/// A state as recorded in a transaction output.
///
/// `encumbrance` is the index of another output in the same transaction that
/// must be consumed together with this one. The host ledger enforces the
/// pairing; contracts only look at presence or absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionState<S> {
    pub data: S,
    pub notary: Party,
    pub encumbrance: Option<u32>,
}

impl<S> TransactionState<S> {
    pub fn new(data: S, notary: Party) -> Self {
        Self {
            data,
            notary,
            encumbrance: None,
        }
    }

    pub fn encumbered_by(mut self, index: u32) -> Self {
        self.encumbrance = Some(index);
        self
    }

    pub fn is_encumbered(&self) -> bool {
        self.encumbrance.is_some()
    }
}

/// A consumed state paired with the reference it was created under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAndRef<S> {
    pub state: TransactionState<S>,
    pub reference: StateRef,
}

/// A command and the keys required to sign for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command<C> {
    pub value: C,
    pub signers: Vec<PublicKey>,
}

impl<C> Command<C> {
    pub fn requires(&self, key: &PublicKey) -> bool {
        self.signers.contains(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// A code or contract package.
    Contract,
    /// Any other file, including evidence archives.
    Data,
}

/// Raw attachment bytes, content-addressed by their SHA-256.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: SecureHash,
    pub kind: AttachmentKind,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(kind: AttachmentKind, bytes: Vec<u8>) -> Self {
        Self {
            id: sha256(&bytes),
            kind,
            bytes,
        }
    }

    pub fn is_contract(&self) -> bool {
        self.kind == AttachmentKind::Contract
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// An immutable transaction with every input resolved and every attachment
/// fetched. Verification never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerTransaction<S, C> {
    pub id: SecureHash,
    pub inputs: Vec<StateAndRef<S>>,
    pub outputs: Vec<TransactionState<S>>,
    pub commands: Vec<Command<C>>,
    pub attachments: Vec<Attachment>,
    pub notary: Option<Party>,
}

impl<S, C> LedgerTransaction<S, C> {
    /// Inputs whose data projects to `T`, with the input they came from.
    pub fn inputs_of<'a, T: 'a>(
        &'a self,
        project: impl Fn(&'a S) -> Option<T>,
    ) -> Vec<(&'a StateAndRef<S>, T)> {
        self.inputs
            .iter()
            .filter_map(|input| project(&input.state.data).map(|t| (input, t)))
            .collect()
    }

    /// Outputs whose data projects to `T`, with their output index.
    pub fn outputs_of<'a, T: 'a>(
        &'a self,
        project: impl Fn(&'a S) -> Option<T>,
    ) -> Vec<(usize, &'a TransactionState<S>, T)> {
        self.outputs
            .iter()
            .enumerate()
            .filter_map(|(i, output)| project(&output.data).map(|t| (i, output, t)))
            .collect()
    }

    /// Commands whose value projects to `T`.
    pub fn commands_of<'a, T: 'a>(
        &'a self,
        project: impl Fn(&'a C) -> Option<T>,
    ) -> Vec<(T, &'a Command<C>)> {
        self.commands
            .iter()
            .filter_map(|command| project(&command.value).map(|t| (t, command)))
            .collect()
    }

    /// Output `index` as a future input of a later transaction.
    pub fn out_ref(&self, index: u32) -> Option<StateAndRef<S>>
    where
        S: Clone,
    {
        let state = self.outputs.get(usize::try_from(index).ok()?)?.clone();
        Some(StateAndRef {
            state,
            reference: StateRef::new(self.id, index),
        })
    }
}
