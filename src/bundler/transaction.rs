//! Bundle Transaction
//!
//! The buffered transaction representation. The accumulator only ever sees an
//! ordered instruction list, a fee payer, and a recent-block reference; it
//! never touches signatures. Compilation into a wire message is deferred to
//! whoever signs.

use solana_sdk::{hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey};

/// An unsigned transaction held in the bundle buffer
#[derive(Debug, Clone, PartialEq)]
pub struct BundleTransaction {
    fee_payer: Pubkey,
    recent_blockhash: Hash,
    instructions: Vec<Instruction>,
}

impl BundleTransaction {
    /// Create a new buffered transaction
    pub fn new(fee_payer: Pubkey, recent_blockhash: Hash, instructions: Vec<Instruction>) -> Self {
        Self {
            fee_payer,
            recent_blockhash,
            instructions,
        }
    }

    /// Account that pays fees for this transaction
    pub fn fee_payer(&self) -> &Pubkey {
        &self.fee_payer
    }

    /// Recent-block reference the transaction was built against
    pub fn recent_blockhash(&self) -> &Hash {
        &self.recent_blockhash
    }

    /// Ordered instruction list
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Insert instructions at the front, preserving the original order after them
    pub fn prepend(&mut self, instructions: Vec<Instruction>) {
        self.instructions.splice(0..0, instructions);
    }

    /// Append an instruction at the tail
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Recompile the instruction list into a legacy message.
    ///
    /// The fee payer is preserved; the caller chooses the blockhash so a
    /// submission can re-stamp against a fresh one without rebuilding the
    /// instruction list.
    pub fn compile(&self, recent_blockhash: &Hash) -> Message {
        Message::new_with_blockhash(&self.instructions, Some(&self.fee_payer), recent_blockhash)
    }
}
