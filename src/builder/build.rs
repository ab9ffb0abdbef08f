//! Instruction building implementation.

use super::types::InstructionParams;
use crate::error::CodecError;
use crate::instructions::{RawInstruction, SystemInstructionParams};
use crate::pubkey::Pubkey;

/// Encode parameters into an instruction for their program.
pub fn encode(params: &InstructionParams) -> Result<RawInstruction, CodecError> {
    log::trace!("building {} instruction", params.family());
    match params {
        InstructionParams::System(params) => params.encode(),
        InstructionParams::Token(params) => params.encode(),
        InstructionParams::AssociatedToken(params) => params.encode(),
    }
}

/// Every signer across `instructions`, deduplicated in first-seen order.
pub fn unique_signers(instructions: &[RawInstruction]) -> Vec<Pubkey> {
    let mut signers: Vec<Pubkey> = Vec::new();
    for account in instructions.iter().flat_map(|ix| ix.accounts.iter()) {
        if account.is_signer && !signers.contains(&account.pubkey) {
            signers.push(account.pubkey);
        }
    }
    signers
}

/// Prepend the nonce advance a durable-nonce transaction must start with.
pub fn with_nonce_advance(
    nonce: Pubkey,
    authority: Pubkey,
    instructions: Vec<RawInstruction>,
) -> Result<Vec<RawInstruction>, CodecError> {
    let advance = SystemInstructionParams::AdvanceNonceAccount { nonce, authority }.encode()?;
    let mut all = Vec::with_capacity(instructions.len() + 1);
    all.push(advance);
    all.extend(instructions);
    Ok(all)
}
