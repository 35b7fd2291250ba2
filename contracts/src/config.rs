//! Verifier configuration with TOML file support.

use reissue_attachments::{DEFAULT_MAX_ENTRY_BYTES, EVIDENCE_ENTRY_PREFIX};
use reissue_utils::{LogFormat, LoggingError};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// How strictly evidence transactions are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidencePolicy {
    /// Every evidence signature must verify against the declared id and the
    /// evidence notary must be the notary of the transaction being verified.
    #[default]
    Strict,
    /// Only the presence of the required signers is checked.
    SignerPresence,
}

/// Configuration for a [`crate::ReissuanceVerifier`].
///
/// Can be loaded from a TOML file via [`VerifierConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub evidence_policy: EvidencePolicy,

    /// Archive entry name prefix marking an embedded signed transaction.
    #[serde(default = "default_entry_prefix")]
    pub evidence_entry_prefix: String,

    /// Upper bound on the inflated size of one evidence entry.
    #[serde(default = "default_max_entry_bytes")]
    pub max_evidence_entry_bytes: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_entry_prefix() -> String {
    EVIDENCE_ENTRY_PREFIX.to_string()
}

fn default_max_entry_bytes() -> u64 {
    DEFAULT_MAX_ENTRY_BYTES
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl VerifierConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.evidence_entry_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "evidence_entry_prefix must not be empty".into(),
            ));
        }
        if self.max_evidence_entry_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_evidence_entry_bytes must be positive".into(),
            ));
        }
        self.log_format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        let format = self.log_format.parse::<LogFormat>()?;
        reissue_utils::init_logging(format, &self.log_level)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            evidence_policy: EvidencePolicy::default(),
            evidence_entry_prefix: default_entry_prefix(),
            max_evidence_entry_bytes: default_max_entry_bytes(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
