use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("cannot build a Merkle tree without leaves")]
    EmptyMerkleTree,

    #[error("transaction has no component groups")]
    NoComponentGroups,

    #[error("component group {0} appears more than once")]
    DuplicateComponentGroup(u32),

    #[error("component group index {index} exceeds the maximum of {max}")]
    ComponentGroupOutOfRange { index: u32, max: u32 },

    #[error("component group {group} holds more components than can be indexed")]
    TooManyComponents { group: u32 },

    #[error("privacy salt must not be all zeros")]
    ZeroPrivacySalt,

    #[error("malformed component {position} in group {group}: {reason}")]
    MalformedComponent {
        group: u32,
        position: usize,
        reason: String,
    },

    #[error("notary group holds {0} components, expected at most one")]
    MultipleNotaries(usize),

    #[error("declared id {declared} does not match recomputed id {computed}")]
    IdMismatch { declared: String, computed: String },

    #[error("signature by {by} does not verify against transaction {tx_id}")]
    InvalidSignature { by: String, tx_id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}
