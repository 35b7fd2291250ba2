//! Named parties with deterministic keys.

use reissue_crypto::keypair_from_seed;
use reissue_types::{KeyPair, Party, PublicKey};

/// A party together with the key pair that signs for it.
pub struct TestIdentity {
    pub party: Party,
    pub keys: KeyPair,
}

impl TestIdentity {
    /// Derive an identity whose key is fixed by `seed`.
    pub fn seeded(name: &str, seed: u8) -> Self {
        let keys = keypair_from_seed(&[seed; 32]);
        Self {
            party: Party::new(name, keys.public.clone()),
            keys,
        }
    }

    pub fn party(&self) -> Party {
        self.party.clone()
    }

    pub fn key(&self) -> PublicKey {
        self.keys.public.clone()
    }

    pub fn issuer() -> Self {
        Self::seeded("Issuer", 0x11)
    }

    pub fn requester() -> Self {
        Self::seeded("Requester", 0x22)
    }

    pub fn notary() -> Self {
        Self::seeded("Notary", 0x33)
    }

    /// A second notary, for checks that compare notaries.
    pub fn other_notary() -> Self {
        Self::seeded("Other Notary", 0x44)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_identities_are_stable() {
        assert_eq!(TestIdentity::issuer().key(), TestIdentity::issuer().key());
        assert_ne!(TestIdentity::issuer().key(), TestIdentity::requester().key());
        assert_eq!(TestIdentity::notary().party().name, "Notary");
    }
}
