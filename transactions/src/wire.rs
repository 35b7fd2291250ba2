//! Serialized transactions as they travel between parties and inside evidence
//! attachments.

use reissue_crypto::{sign_hash, verify_hash_signature};
use reissue_types::{KeyPair, Party, PublicKey, SecureHash, Signature, StateRef};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::component::{ComponentGroup, ComponentGroupEnum};
use crate::error::TransactionError;
use crate::merkle::reconstruct_id;
use crate::salt::PrivacySalt;

/// A transaction reduced to its component groups and privacy salt.
///
/// The id is never stored here; it is always recomputed from the parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTransaction {
    pub component_groups: Vec<ComponentGroup>,
    pub privacy_salt: PrivacySalt,
}

impl WireTransaction {
    /// Build a wire transaction, rejecting group layouts that cannot produce an id.
    pub fn new(
        component_groups: Vec<ComponentGroup>,
        privacy_salt: PrivacySalt,
    ) -> Result<Self, TransactionError> {
        let tx = Self {
            component_groups,
            privacy_salt,
        };
        tx.id()?;
        Ok(tx)
    }

    /// Recompute the Merkle id from the component groups.
    pub fn id(&self) -> Result<SecureHash, TransactionError> {
        reconstruct_id(&self.component_groups, &self.privacy_salt)
    }

    pub fn group(&self, group: ComponentGroupEnum) -> Option<&ComponentGroup> {
        self.component_groups
            .iter()
            .find(|g| g.group_index == group.index())
    }

    /// Decode every component of a group as `T`.
    pub fn decode_group<T: DeserializeOwned>(
        &self,
        group: ComponentGroupEnum,
    ) -> Result<Vec<T>, TransactionError> {
        let Some(found) = self.group(group) else {
            return Ok(Vec::new());
        };
        found
            .components
            .iter()
            .enumerate()
            .map(|(position, bytes)| {
                bincode::deserialize(bytes).map_err(|e| TransactionError::MalformedComponent {
                    group: group.index(),
                    position,
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    /// The state references consumed by this transaction.
    pub fn inputs(&self) -> Result<Vec<StateRef>, TransactionError> {
        self.decode_group(ComponentGroupEnum::Inputs)
    }

    /// Number of outputs. Outputs stay opaque; only their presence matters here.
    pub fn output_count(&self) -> usize {
        self.group(ComponentGroupEnum::Outputs)
            .map_or(0, |g| g.components.len())
    }

    /// The notary declared by this transaction, if any.
    pub fn notary(&self) -> Result<Option<Party>, TransactionError> {
        let mut notaries: Vec<Party> = self.decode_group(ComponentGroupEnum::Notary)?;
        match notaries.len() {
            0 => Ok(None),
            1 => Ok(notaries.pop()),
            n => Err(TransactionError::MultipleNotaries(n)),
        }
    }
}

/// A signature over a transaction id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignature {
    pub by: PublicKey,
    pub bytes: Signature,
}

impl TransactionSignature {
    pub fn verify(&self, tx_id: &SecureHash) -> bool {
        verify_hash_signature(tx_id, &self.bytes, &self.by)
    }
}

/// A wire transaction together with its declared id and collected signatures.
///
/// `id` is whatever the producer claimed. Consumers that did not build the
/// transaction themselves must call [`SignedTransaction::verify_declared_id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub id: SecureHash,
    pub tx: WireTransaction,
    pub sigs: Vec<TransactionSignature>,
}

impl SignedTransaction {
    /// Sign `tx` with every key pair, declaring its recomputed id.
    pub fn sign(tx: WireTransaction, signers: &[&KeyPair]) -> Result<Self, TransactionError> {
        let id = tx.id()?;
        let sigs = signers
            .iter()
            .map(|kp| TransactionSignature {
                by: kp.public.clone(),
                bytes: sign_hash(&id, &kp.private),
            })
            .collect();
        Ok(Self { id, tx, sigs })
    }

    /// Append another party's signature over the declared id.
    pub fn with_signature(mut self, signer: &KeyPair) -> Self {
        self.sigs.push(TransactionSignature {
            by: signer.public.clone(),
            bytes: sign_hash(&self.id, &signer.private),
        });
        self
    }

    /// Recompute the id from the parts and compare with the declared one.
    pub fn verify_declared_id(&self) -> Result<(), TransactionError> {
        let computed = self.tx.id()?;
        if computed != self.id {
            return Err(TransactionError::IdMismatch {
                declared: self.id.to_string(),
                computed: computed.to_string(),
            });
        }
        Ok(())
    }

    pub fn signers(&self) -> impl Iterator<Item = &PublicKey> {
        self.sigs.iter().map(|s| &s.by)
    }

    pub fn is_signed_by(&self, key: &PublicKey) -> bool {
        self.signers().any(|k| k == key)
    }

    /// Check every attached signature against the declared id.
    pub fn verify_signatures(&self) -> Result<(), TransactionError> {
        match self.sigs.iter().find(|s| !s.verify(&self.id)) {
            Some(bad) => Err(TransactionError::InvalidSignature {
                by: bad.by.to_string(),
                tx_id: self.id.to_string(),
            }),
            None => Ok(()),
        }
    }
}
