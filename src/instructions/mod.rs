//! Instruction codecs for the System, SPL Token and Associated Token
//! Account programs.
//!
//! Each family exposes a typed `*InstructionParams` enum with `encode`,
//! `decode` and `info`. Decoding returns the same type the encoder consumes.

mod amount;
mod associated_token;
mod authority;
mod registry;
mod system;
mod token;
mod types;

pub use amount::UiTokenAmount;
pub use associated_token::{associated_token_address, AssociatedTokenInstructionParams};
pub use authority::{resolve_authority, Authority};
pub use registry::{SystemInstructionType, TokenInstructionType};
pub use system::SystemInstructionParams;
pub use token::{AuthorityType, TokenInstructionParams};
pub use types::*;

use crate::error::CodecError;
use crate::pubkey::Pubkey;
use serde_json::{Map, Value};

/// Fail with `MalformedAccountList` when fewer than `expected` accounts are present.
pub(crate) fn require_accounts(
    variant: &'static str,
    accounts: &[Pubkey],
    expected: usize,
) -> Result<(), CodecError> {
    if accounts.len() < expected {
        return Err(CodecError::MalformedAccountList {
            variant,
            expected,
            actual: accounts.len(),
        });
    }
    Ok(())
}

/// Base58 text of the account at `index`, empty when absent.
pub(crate) fn key_at(accounts: &[Pubkey], index: usize) -> String {
    accounts
        .get(index)
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub(crate) fn to_info_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
