//! Ed25519 signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use reissue_types::{PrivateKey, PublicKey, SecureHash, Signature};

/// Sign a message with a private key.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Malformed public keys verify as `false` rather than erroring.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

/// Sign a transaction id. Transaction signatures always cover the id bytes.
pub fn sign_hash(hash: &SecureHash, private_key: &PrivateKey) -> Signature {
    sign_message(hash.as_bytes(), private_key)
}

/// Verify a signature over a transaction id.
pub fn verify_hash_signature(
    hash: &SecureHash,
    signature: &Signature,
    public_key: &PublicKey,
) -> bool {
    verify_signature(hash.as_bytes(), signature, public_key)
}
