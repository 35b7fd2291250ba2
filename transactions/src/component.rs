//! Component groups: the unit of Merkle-tree construction.
//!
//! A transaction is a list of groups, each an ordered list of serialized
//! components tagged with a small integer index. Indices are fixed forever so
//! that newer formats can append groups while older verifiers still
//! reconstruct the same id.

use serde::{Deserialize, Serialize};

/// The known component group indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ComponentGroupEnum {
    Inputs = 0,
    Outputs = 1,
    Commands = 2,
    Attachments = 3,
    Notary = 4,
    TimeWindow = 5,
    Signers = 6,
    References = 7,
    Parameters = 8,
}

impl ComponentGroupEnum {
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// One group of serialized components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentGroup {
    pub group_index: u32,
    pub components: Vec<Vec<u8>>,
}

impl ComponentGroup {
    pub fn new(group_index: u32, components: Vec<Vec<u8>>) -> Self {
        Self {
            group_index,
            components,
        }
    }

    pub fn of(group: ComponentGroupEnum, components: Vec<Vec<u8>>) -> Self {
        Self::new(group.index(), components)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
