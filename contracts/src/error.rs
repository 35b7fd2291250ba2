use thiserror::Error;

/// A rejected re-issuance transaction.
///
/// Every variant is fatal: a transaction either satisfies all rules of its
/// command or is rejected outright.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wrong number or kind of inputs, outputs or commands.
    #[error("structural: {0}")]
    Structural(String),

    /// Fields disagree across linked states.
    #[error("relational: {0}")]
    Relational(String),

    /// Hash mismatch, missing or invalid signature, missing notary.
    #[error("cryptographic: {0}")]
    Cryptographic(String),

    #[error("missing evidence: {0}")]
    MissingEvidence(String),

    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("evidence attachment unreadable: {0}")]
    Attachment(#[from] reissue_attachments::AttachmentError),

    #[error("evidence transaction malformed: {0}")]
    Transaction(#[from] reissue_transactions::TransactionError),
}

impl ContractError {
    /// Short label for the failure class, used in logs and outcome counters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structural(_) => "structural",
            Self::Relational(_) => "relational",
            Self::Cryptographic(_) => "cryptographic",
            Self::MissingEvidence(_) => "missing_evidence",
            Self::UnsupportedCommand(_) => "unsupported_command",
            Self::Attachment(_) => "attachment",
            Self::Transaction(_) => "transaction",
        }
    }
}

/// Failure loading a [`crate::VerifierConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
