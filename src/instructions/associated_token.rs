//! Associated Token Account Program instructions.
//!
//! An associated token account lives at a program-derived address seeded by
//! `[wallet, token_program, mint]`. The program has no fixed payload beyond
//! its tag, and older clients send `Create` with empty data.

use super::types::{
    AccountRef, RawInstruction, ATA_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use super::{key_at, require_accounts, to_info_map};
use crate::error::CodecError;
use crate::pubkey::{serde_base58, Pubkey};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Payer, wallet, mint, system program, token program. A trailing rent
/// sysvar is accepted but no longer required.
const MIN_ACCOUNTS: usize = 6;

fn default_token_program() -> Pubkey {
    TOKEN_PROGRAM_ID
}

/// Derive the associated token account address for `wallet` and `mint`.
pub fn associated_token_address(wallet: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    let seeds = &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()];
    let (ata, _bump) = Pubkey::find_program_address(seeds, &ATA_PROGRAM_ID);
    ata
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AssociatedTokenInstructionParams {
    /// Fails on chain if the account already exists.
    Create {
        #[serde(with = "serde_base58")]
        payer: Pubkey,
        #[serde(with = "serde_base58")]
        wallet: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(default = "default_token_program", with = "serde_base58")]
        token_program: Pubkey,
    },

    /// Succeeds without changes if the account already exists.
    CreateIdempotent {
        #[serde(with = "serde_base58")]
        payer: Pubkey,
        #[serde(with = "serde_base58")]
        wallet: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(default = "default_token_program", with = "serde_base58")]
        token_program: Pubkey,
    },
}

impl AssociatedTokenInstructionParams {
    pub fn tag(&self) -> u8 {
        match self {
            Self::Create { .. } => 0,
            Self::CreateIdempotent { .. } => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::CreateIdempotent { .. } => "createIdempotent",
        }
    }

    fn parts(&self) -> (&Pubkey, &Pubkey, &Pubkey, &Pubkey) {
        match self {
            Self::Create {
                payer,
                wallet,
                mint,
                token_program,
            }
            | Self::CreateIdempotent {
                payer,
                wallet,
                mint,
                token_program,
            } => (payer, wallet, mint, token_program),
        }
    }

    /// The account this instruction creates.
    pub fn associated_account(&self) -> Pubkey {
        let (_, wallet, mint, token_program) = self.parts();
        associated_token_address(wallet, mint, token_program)
    }

    pub fn encode(&self) -> Result<RawInstruction, CodecError> {
        log::trace!("encoding associated token instruction {}", self.name());
        let (payer, wallet, mint, token_program) = self.parts();
        Ok(RawInstruction {
            program_id: ATA_PROGRAM_ID,
            accounts: vec![
                AccountRef::new(*payer, true),
                AccountRef::new(self.associated_account(), false),
                AccountRef::new_readonly(*wallet, false),
                AccountRef::new_readonly(*mint, false),
                AccountRef::new_readonly(SYSTEM_PROGRAM_ID, false),
                AccountRef::new_readonly(*token_program, false),
            ],
            data: vec![self.tag()],
        })
    }

    /// Decode an Associated Token Account instruction.
    ///
    /// Empty data is the legacy form of `Create`. Other tags return `Ok(None)`.
    pub fn decode(data: &[u8], accounts: &[Pubkey]) -> Result<Option<Self>, CodecError> {
        let tag = data.first().copied().unwrap_or(0);
        let name = match tag {
            0 => "create",
            1 => "createIdempotent",
            other => {
                log::debug!("unregistered associated token instruction tag {}", other);
                return Ok(None);
            }
        };
        require_accounts(name, accounts, MIN_ACCOUNTS)?;

        let (payer, wallet, mint, token_program) =
            (accounts[0], accounts[2], accounts[3], accounts[5]);
        Ok(Some(if tag == 0 {
            Self::Create {
                payer,
                wallet,
                mint,
                token_program,
            }
        } else {
            Self::CreateIdempotent {
                payer,
                wallet,
                mint,
                token_program,
            }
        }))
    }

    /// Presentation fields, labeled from the accounts as recorded on chain.
    pub fn info(&self, accounts: &[Pubkey]) -> Map<String, Value> {
        let (payer, wallet, mint, token_program) = self.parts();
        let mut info = to_info_map(json!({
            "source": payer.to_string(),
            "account": key_at(accounts, 1),
            "wallet": wallet.to_string(),
            "mint": mint.to_string(),
            "systemProgram": key_at(accounts, 4),
            "tokenProgram": token_program.to_string(),
        }));
        if let Some(rent) = accounts.get(6) {
            info.insert("rentSysvar".to_string(), rent.to_string().into());
        }
        info
    }
}
