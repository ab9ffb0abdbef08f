//! Shared instruction types and well-known program addresses.

use crate::pubkey::{serde_base58, Pubkey};
use serde::Serialize;
use std::fmt;

/// System Program (`11111111111111111111111111111111`).
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);

/// SPL Token Program (`TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`).
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// Token-2022 Program (`TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`).
///
/// Its base instruction set shares the SPL Token layout.
pub const TOKEN_2022_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218, 182, 26, 252, 77,
    131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
]);

/// Associated Token Account Program (`ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`).
pub const ATA_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);

/// Rent sysvar (`SysvarRent111111111111111111111111111111111`).
pub const SYSVAR_RENT: Pubkey = Pubkey::new_from_array([
    6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127, 88, 218, 238, 8, 155,
    161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
]);

/// Recent blockhashes sysvar (`SysvarRecentB1ockHashes11111111111111111111`).
/// Required by the nonce instructions to read the stored blockhash.
pub const SYSVAR_RECENT_BLOCKHASHES: Pubkey = Pubkey::new_from_array([
    6, 167, 213, 23, 25, 44, 86, 142, 224, 138, 132, 95, 115, 210, 151, 136, 207, 3, 92, 49, 69,
    178, 26, 179, 68, 216, 6, 46, 169, 64, 0, 0,
]);

/// The most signer accounts an SPL multisig can hold.
pub const MAX_SIGNERS: usize = 11;

/// The longest seed the System Program accepts for derived addresses.
pub const MAX_SEED_LEN: usize = 32;

/// Instruction families this codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramFamily {
    System,
    Token,
    AssociatedToken,
}

impl ProgramFamily {
    /// Resolve the family handling `program_id`, if any.
    pub fn from_program_id(program_id: &Pubkey) -> Option<Self> {
        match *program_id {
            SYSTEM_PROGRAM_ID => Some(Self::System),
            TOKEN_PROGRAM_ID | TOKEN_2022_PROGRAM_ID => Some(Self::Token),
            ATA_PROGRAM_ID => Some(Self::AssociatedToken),
            _ => None,
        }
    }

    /// Program id used when encoding for this family.
    pub fn program_id(&self) -> Pubkey {
        match self {
            Self::System => SYSTEM_PROGRAM_ID,
            Self::Token => TOKEN_PROGRAM_ID,
            Self::AssociatedToken => ATA_PROGRAM_ID,
        }
    }

    /// The program label used in parsed output.
    pub fn program_name(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Token => "spl-token",
            Self::AssociatedToken => "spl-associated-token-account",
        }
    }
}

impl fmt::Display for ProgramFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program_name())
    }
}

/// A positional account reference with its role in one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    #[serde(with = "serde_base58")]
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountRef {
    /// A writable account.
    pub fn new(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account.
    pub fn new_readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// The on-wire unit: program, ordered accounts, payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstruction {
    #[serde(with = "serde_base58")]
    pub program_id: Pubkey,
    pub accounts: Vec<AccountRef>,
    pub data: Vec<u8>,
}

impl RawInstruction {
    /// Account keys in instruction order.
    pub fn account_keys(&self) -> Vec<Pubkey> {
        self.accounts.iter().map(|a| a.pubkey).collect()
    }
}
