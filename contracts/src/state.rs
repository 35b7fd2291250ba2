//! The closed state and command sets of a re-issuance transaction.

use reissue_transactions::LedgerTransaction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::asset::AssetCommand;
use crate::error::ContractError;
use crate::lock::ReissuanceLock;
use crate::request::ReissuanceRequest;

/// Every state a re-issuance transaction may consume or produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReissuanceState<A> {
    Request(ReissuanceRequest),
    Lock(ReissuanceLock<A>),
    Asset(A),
}

impl<A> ReissuanceState<A> {
    pub fn as_request(&self) -> Option<&ReissuanceRequest> {
        match self {
            Self::Request(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_lock(&self) -> Option<&ReissuanceLock<A>> {
        match self {
            Self::Lock(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&A> {
        match self {
            Self::Asset(a) => Some(a),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestCommand {
    Create,
    Accept,
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockCommand {
    Create,
    #[serde(alias = "Use")]
    Deactivate,
    Delete,
}

impl FromStr for RequestCommand {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(Self::Create),
            "Accept" => Ok(Self::Accept),
            "Reject" => Ok(Self::Reject),
            other => Err(ContractError::UnsupportedCommand(format!(
                "unknown request command {other:?}"
            ))),
        }
    }
}

impl FromStr for LockCommand {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(Self::Create),
            "Deactivate" | "Use" => Ok(Self::Deactivate),
            "Delete" => Ok(Self::Delete),
            other => Err(ContractError::UnsupportedCommand(format!(
                "unknown lock command {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReissuanceCommand {
    Request(RequestCommand),
    Lock(LockCommand),
    Asset(AssetCommand),
}

impl ReissuanceCommand {
    pub fn as_request(&self) -> Option<RequestCommand> {
        match self {
            Self::Request(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_lock(&self) -> Option<LockCommand> {
        match self {
            Self::Lock(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetCommand> {
        match self {
            Self::Asset(c) => Some(c),
            _ => None,
        }
    }
}

/// A fully-resolved transaction over re-issuance states.
pub type ReissuanceTransaction<A> = LedgerTransaction<ReissuanceState<A>, ReissuanceCommand>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_is_an_alias_for_deactivate() {
        assert_eq!("Use".parse::<LockCommand>().unwrap(), LockCommand::Deactivate);
        assert_eq!(
            "Deactivate".parse::<LockCommand>().unwrap(),
            LockCommand::Deactivate
        );
        let from_toml: LockCommand =
            toml::from_str::<std::collections::BTreeMap<String, LockCommand>>("c = \"Use\"")
                .unwrap()["c"];
        assert_eq!(from_toml, LockCommand::Deactivate);
    }

    #[test]
    fn unknown_tags_are_unsupported() {
        assert!(matches!(
            "Burn".parse::<LockCommand>(),
            Err(ContractError::UnsupportedCommand(_))
        ));
        assert!(matches!(
            "accept".parse::<RequestCommand>(),
            Err(ContractError::UnsupportedCommand(_))
        ));
    }
}
