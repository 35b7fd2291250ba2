//! SHA-256 hashing for transaction components and Merkle nodes.

use reissue_types::SecureHash;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> SecureHash {
    SecureHash::new(Sha256::digest(data).into())
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> SecureHash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    SecureHash::new(hasher.finalize().into())
}

/// Hash two child nodes into their parent.
pub fn hash_pair(left: &SecureHash, right: &SecureHash) -> SecureHash {
    sha256_multi(&[left.as_bytes(), right.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256(b"abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_different_inputs() {
        assert_ne!(sha256(b"hello"), sha256(b"world"));
    }

    #[test]
    fn sha256_multi_equivalent() {
        let single = sha256(b"helloworld");
        let multi = sha256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn hash_pair_is_ordered() {
        let a = sha256(b"a");
        let b = sha256(b"b");
        assert_ne!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn hash_pair_matches_concatenation() {
        let a = sha256(b"a");
        let b = sha256(b"b");
        let mut joined = a.as_bytes().to_vec();
        joined.extend_from_slice(b.as_bytes());
        assert_eq!(hash_pair(&a, &b), sha256(&joined));
    }
}
