//! Merkle reconstruction of a transaction's content hash.
//!
//! The id of a transaction is derived entirely from its component groups and
//! privacy salt:
//!
//! 1. every component gets a nonce `H(component || salt || group || position)`
//! 2. every component gets a leaf `H(nonce || component)`
//! 3. each group's leaves are folded into a binary Merkle root
//! 4. group roots are laid out by index `0..=max`, with [`SecureHash::ALL_ONES`]
//!    standing in for absent or empty groups
//! 5. one more Merkle tree over that list yields the id
//!
//! Integers are encoded big-endian as `u32`. Odd levels duplicate their last
//! node; a single leaf is its own root.

use reissue_crypto::{hash_pair, sha256_multi};
use reissue_types::SecureHash;
use std::collections::BTreeMap;

use crate::component::ComponentGroup;
use crate::error::TransactionError;
use crate::salt::PrivacySalt;

/// Highest group index accepted during reconstruction.
///
/// Bounds the sentinel padding so a hostile index cannot force a huge allocation.
pub const MAX_GROUP_INDEX: u32 = 255;

/// Per-component nonce.
pub fn component_nonce(
    component: &[u8],
    salt: &PrivacySalt,
    group_index: u32,
    position: u32,
) -> SecureHash {
    sha256_multi(&[
        component,
        salt.as_bytes(),
        &group_index.to_be_bytes(),
        &position.to_be_bytes(),
    ])
}

/// Per-component leaf hash.
pub fn component_hash(nonce: &SecureHash, component: &[u8]) -> SecureHash {
    sha256_multi(&[nonce.as_bytes(), component])
}

/// Fold a list of leaves into a Merkle root.
pub fn merkle_root(leaves: &[SecureHash]) -> Result<SecureHash, TransactionError> {
    if leaves.is_empty() {
        return Err(TransactionError::EmptyMerkleTree);
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                hash_pair(left, right)
            })
            .collect();
    }
    Ok(level[0])
}

/// Leaf hashes of one group, in component order.
pub fn group_leaves(
    group: &ComponentGroup,
    salt: &PrivacySalt,
) -> Result<Vec<SecureHash>, TransactionError> {
    group
        .components
        .iter()
        .enumerate()
        .map(|(position, component)| {
            let position = u32::try_from(position).map_err(|_| {
                TransactionError::TooManyComponents {
                    group: group.group_index,
                }
            })?;
            let nonce = component_nonce(component, salt, group.group_index, position);
            Ok(component_hash(&nonce, component))
        })
        .collect()
}

/// Merkle root of one group, or `None` when the group has no components.
pub fn group_root(
    group: &ComponentGroup,
    salt: &PrivacySalt,
) -> Result<Option<SecureHash>, TransactionError> {
    if group.is_empty() {
        return Ok(None);
    }
    merkle_root(&group_leaves(group, salt)?).map(Some)
}

/// The top-level leaf list: one entry per index from 0 to the highest index
/// observed, with the all-ones sentinel filling gaps and empty groups.
pub fn group_roots(
    groups: &[ComponentGroup],
    salt: &PrivacySalt,
) -> Result<Vec<SecureHash>, TransactionError> {
    if groups.is_empty() {
        return Err(TransactionError::NoComponentGroups);
    }

    let mut by_index = BTreeMap::new();
    for group in groups {
        if group.group_index > MAX_GROUP_INDEX {
            return Err(TransactionError::ComponentGroupOutOfRange {
                index: group.group_index,
                max: MAX_GROUP_INDEX,
            });
        }
        if by_index.insert(group.group_index, group).is_some() {
            return Err(TransactionError::DuplicateComponentGroup(group.group_index));
        }
    }

    // Non-empty by the check above.
    let max_index = by_index.keys().next_back().copied().unwrap_or_default();
    (0..=max_index)
        .map(|index| match by_index.get(&index) {
            Some(group) => Ok(group_root(group, salt)?.unwrap_or(SecureHash::ALL_ONES)),
            None => Ok(SecureHash::ALL_ONES),
        })
        .collect()
}

/// Recompute a transaction's content hash from its parts.
pub fn reconstruct_id(
    groups: &[ComponentGroup],
    salt: &PrivacySalt,
) -> Result<SecureHash, TransactionError> {
    merkle_root(&group_roots(groups, salt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentGroupEnum;
    use reissue_crypto::sha256;

    fn salt() -> PrivacySalt {
        PrivacySalt::new([3u8; 32]).unwrap()
    }

    fn group(index: u32, parts: &[&str]) -> ComponentGroup {
        ComponentGroup::new(index, parts.iter().map(|p| p.as_bytes().to_vec()).collect())
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let leaf = sha256(b"only");
        assert_eq!(merkle_root(&[leaf]).unwrap(), leaf);
    }

    #[test]
    fn empty_tree_is_an_error() {
        assert!(matches!(
            merkle_root(&[]),
            Err(TransactionError::EmptyMerkleTree)
        ));
    }

    #[test]
    fn odd_level_duplicates_last_leaf() {
        let a = sha256(b"a");
        let b = sha256(b"b");
        let c = sha256(b"c");
        let expected = hash_pair(&hash_pair(&a, &b), &hash_pair(&c, &c));
        assert_eq!(merkle_root(&[a, b, c]).unwrap(), expected);
    }

    #[test]
    fn leaf_is_hash_of_nonce_and_component() {
        let salt = salt();
        let g = group(1, &["x", "y"]);
        let leaves = group_leaves(&g, &salt).unwrap();

        let mut preimage = b"y".to_vec();
        preimage.extend_from_slice(salt.as_bytes());
        preimage.extend_from_slice(&1u32.to_be_bytes());
        preimage.extend_from_slice(&1u32.to_be_bytes());
        let nonce = sha256(&preimage);

        let mut leaf_preimage = nonce.as_bytes().to_vec();
        leaf_preimage.extend_from_slice(b"y");
        assert_eq!(leaves[1], sha256(&leaf_preimage));
    }

    #[test]
    fn position_changes_leaf() {
        let salt = salt();
        let g = group(0, &["same", "same"]);
        let leaves = group_leaves(&g, &salt).unwrap();
        assert_ne!(leaves[0], leaves[1]);
    }

    #[test]
    fn gap_is_filled_with_sentinel() {
        let groups = vec![group(0, &["in"]), group(1, &["out"]), group(3, &["att"])];
        let roots = group_roots(&groups, &salt()).unwrap();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[2], SecureHash::ALL_ONES);
        assert_ne!(roots[0], SecureHash::ALL_ONES);
        assert_ne!(roots[3], SecureHash::ALL_ONES);
    }

    #[test]
    fn empty_group_is_sentinel() {
        let groups = vec![group(0, &["in"]), ComponentGroup::new(1, Vec::new())];
        let roots = group_roots(&groups, &salt()).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1], SecureHash::ALL_ONES);
    }

    #[test]
    fn inner_empty_group_keeps_id() {
        let salt = salt();
        let without = vec![group(0, &["in"]), group(2, &["cmd"])];
        let with = vec![group(0, &["in"]), ComponentGroup::new(1, Vec::new()), group(2, &["cmd"])];
        assert_eq!(
            reconstruct_id(&without, &salt).unwrap(),
            reconstruct_id(&with, &salt).unwrap()
        );
    }

    #[test]
    fn trailing_empty_group_extends_the_tree() {
        let salt = salt();
        let without = vec![group(0, &["in"])];
        let with = vec![group(0, &["in"]), ComponentGroup::new(1, Vec::new())];
        assert_ne!(
            reconstruct_id(&without, &salt).unwrap(),
            reconstruct_id(&with, &salt).unwrap()
        );
    }

    #[test]
    fn group_order_in_input_does_not_matter() {
        let salt = salt();
        let a = vec![group(0, &["in"]), group(4, &["notary"])];
        let b = vec![group(4, &["notary"]), group(0, &["in"])];
        assert_eq!(
            reconstruct_id(&a, &salt).unwrap(),
            reconstruct_id(&b, &salt).unwrap()
        );
    }

    #[test]
    fn component_order_matters() {
        let salt = salt();
        let a = vec![group(0, &["one", "two"])];
        let b = vec![group(0, &["two", "one"])];
        assert_ne!(
            reconstruct_id(&a, &salt).unwrap(),
            reconstruct_id(&b, &salt).unwrap()
        );
    }

    #[test]
    fn salt_changes_id() {
        let groups = vec![group(0, &["in"])];
        let other = PrivacySalt::new([4u8; 32]).unwrap();
        assert_ne!(
            reconstruct_id(&groups, &salt()).unwrap(),
            reconstruct_id(&groups, &other).unwrap()
        );
    }

    #[test]
    fn duplicate_group_rejected() {
        let groups = vec![group(2, &["a"]), group(2, &["b"])];
        assert!(matches!(
            reconstruct_id(&groups, &salt()),
            Err(TransactionError::DuplicateComponentGroup(2))
        ));
    }

    #[test]
    fn huge_group_index_rejected() {
        let groups = vec![group(u32::MAX, &["a"])];
        assert!(matches!(
            reconstruct_id(&groups, &salt()),
            Err(TransactionError::ComponentGroupOutOfRange { .. })
        ));
    }

    #[test]
    fn no_groups_rejected() {
        assert!(matches!(
            reconstruct_id(&[], &salt()),
            Err(TransactionError::NoComponentGroups)
        ));
    }

    #[test]
    fn newer_format_extra_group_still_reconstructs() {
        let salt = salt();
        let mut groups = vec![
            ComponentGroup::of(ComponentGroupEnum::Inputs, vec![b"in".to_vec()]),
            ComponentGroup::of(ComponentGroupEnum::Notary, vec![b"n".to_vec()]),
        ];
        let base = group_roots(&groups, &salt).unwrap();
        groups.push(group(12, &["future"]));
        let extended = group_roots(&groups, &salt).unwrap();
        assert_eq!(extended.len(), 13);
        assert_eq!(&extended[..5], &base[..]);
    }
}
