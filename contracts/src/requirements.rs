//! Small guards shared by the contracts. Each turns a failed condition into
//! the matching [`ContractError`] class.

use reissue_transactions::Command;
use reissue_types::{Party, PublicKey};

use crate::error::ContractError;

pub(crate) fn require_structural(
    cond: bool,
    msg: impl FnOnce() -> String,
) -> Result<(), ContractError> {
    if cond {
        Ok(())
    } else {
        Err(ContractError::Structural(msg()))
    }
}

pub(crate) fn require_relational(
    cond: bool,
    msg: impl FnOnce() -> String,
) -> Result<(), ContractError> {
    if cond {
        Ok(())
    } else {
        Err(ContractError::Relational(msg()))
    }
}

pub(crate) fn require_count(
    what: &str,
    actual: usize,
    expected: usize,
) -> Result<(), ContractError> {
    require_structural(actual == expected, || {
        format!("expected {expected} {what}, found {actual}")
    })
}

/// `party` must be among the command's required signers.
pub(crate) fn require_signer<C>(
    command: &Command<C>,
    role: &str,
    party: &Party,
) -> Result<(), ContractError> {
    if command.requires(&party.owning_key) {
        Ok(())
    } else {
        Err(ContractError::Cryptographic(format!(
            "{role} {party} must be a required signer"
        )))
    }
}

/// Every key in `keys` must be among the command's required signers.
pub(crate) fn require_signers<'a, C>(
    command: &Command<C>,
    what: &str,
    mut keys: impl Iterator<Item = &'a PublicKey>,
) -> Result<(), ContractError> {
    match keys.find(|k| !command.requires(k)) {
        Some(missing) => Err(ContractError::Cryptographic(format!(
            "{what} signer {missing} must be a required signer"
        ))),
        None => Ok(()),
    }
}

/// The single element of `items`, or a structural failure naming `what`.
pub(crate) fn single<T>(what: &str, mut items: Vec<T>) -> Result<T, ContractError> {
    let count = items.len();
    match items.pop() {
        Some(item) if count == 1 => Ok(item),
        _ => Err(ContractError::Structural(format!(
            "expected exactly one {what}, found {count}"
        ))),
    }
}

/// The single command of one family, e.g. the one lock command of a
/// transaction. Zero or several is an unsupported command, never a pass.
pub(crate) fn single_command<'a, T, C>(
    family: &str,
    mut commands: Vec<(T, &'a Command<C>)>,
) -> Result<(T, &'a Command<C>), ContractError> {
    let count = commands.len();
    match commands.pop() {
        Some(found) if count == 1 => Ok(found),
        _ => Err(ContractError::UnsupportedCommand(format!(
            "expected exactly one {family} command, found {count}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rejects_zero_and_many() {
        assert_eq!(single("x", vec![1]).unwrap(), 1);
        assert!(matches!(
            single::<u8>("x", vec![]),
            Err(ContractError::Structural(_))
        ));
        assert!(matches!(
            single("x", vec![1, 2]),
            Err(ContractError::Structural(_))
        ));
    }

    #[test]
    fn count_mismatch_is_structural() {
        assert!(require_count("outputs", 0, 0).is_ok());
        let err = require_count("outputs", 2, 1).unwrap_err();
        assert_eq!(err.to_string(), "structural: expected 1 outputs, found 2");
    }
}
