//! Append-only transaction assembly.
//!
//! Every `with_*` call consumes the builder and hands back an extended one;
//! nothing already added can be changed. [`TransactionBuilder::finish`]
//! serializes the typed parts into component groups, derives the Merkle id and
//! freezes the result into a [`LedgerTransaction`].

use reissue_types::{Party, PublicKey};
use serde::Serialize;

use crate::component::{ComponentGroup, ComponentGroupEnum};
use crate::error::TransactionError;
use crate::ledger::{Attachment, Command, LedgerTransaction, StateAndRef, TransactionState};
use crate::salt::PrivacySalt;
use crate::wire::WireTransaction;

#[derive(Clone, Debug)]
pub struct TransactionBuilder<S, C> {
    inputs: Vec<StateAndRef<S>>,
    outputs: Vec<TransactionState<S>>,
    commands: Vec<Command<C>>,
    attachments: Vec<Attachment>,
    notary: Option<Party>,
}

impl<S, C> Default for TransactionBuilder<S, C> {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            commands: Vec::new(),
            attachments: Vec::new(),
            notary: None,
        }
    }
}

impl<S, C> TransactionBuilder<S, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notary(mut self, notary: Party) -> Self {
        self.notary = Some(notary);
        self
    }

    pub fn with_input(mut self, input: StateAndRef<S>) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: TransactionState<S>) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn with_command(mut self, value: C, signers: Vec<PublicKey>) -> Self {
        self.commands.push(Command { value, signers });
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Index the next output will receive, for wiring encumbrances.
    pub fn next_output_index(&self) -> u32 {
        u32::try_from(self.outputs.len()).unwrap_or(u32::MAX)
    }
}

impl<S: Serialize, C: Serialize> TransactionBuilder<S, C> {
    /// Serialize the typed parts into component groups. Empty groups are omitted.
    pub fn to_wire(&self, salt: PrivacySalt) -> Result<WireTransaction, TransactionError> {
        let mut groups = Vec::new();
        push_group(
            &mut groups,
            ComponentGroupEnum::Inputs,
            self.inputs.iter().map(|i| &i.reference),
        )?;
        push_group(&mut groups, ComponentGroupEnum::Outputs, self.outputs.iter())?;
        push_group(
            &mut groups,
            ComponentGroupEnum::Commands,
            self.commands.iter().map(|c| &c.value),
        )?;
        push_group(
            &mut groups,
            ComponentGroupEnum::Attachments,
            self.attachments.iter().map(|a| &a.id),
        )?;
        push_group(&mut groups, ComponentGroupEnum::Notary, self.notary.iter())?;
        push_group(
            &mut groups,
            ComponentGroupEnum::Signers,
            self.commands.iter().map(|c| &c.signers),
        )?;
        WireTransaction::new(groups, salt)
    }

    /// Freeze the builder into a ledger transaction identified by its wire id.
    pub fn finish(self, salt: PrivacySalt) -> Result<LedgerTransaction<S, C>, TransactionError> {
        let id = self.to_wire(salt)?.id()?;
        Ok(LedgerTransaction {
            id,
            inputs: self.inputs,
            outputs: self.outputs,
            commands: self.commands,
            attachments: self.attachments,
            notary: self.notary,
        })
    }
}

fn push_group<'a, T: Serialize + 'a>(
    groups: &mut Vec<ComponentGroup>,
    group: ComponentGroupEnum,
    items: impl Iterator<Item = &'a T>,
) -> Result<(), TransactionError> {
    let components = items
        .map(bincode::serialize)
        .collect::<Result<Vec<_>, _>>()?;
    if !components.is_empty() {
        groups.push(ComponentGroup::of(group, components));
    }
    Ok(())
}
