//! System Program instructions.
//!
//! The System Program is responsible for:
//! - Creating new accounts, optionally at seed-derived addresses
//! - Allocating account data and assigning owners
//! - Transferring lamports
//! - Nonce account operations
//!
//! Each payload is a u32 tag followed by the variant's fields. Seeds are
//! written inline with their own u64 length prefix.

use super::registry::SystemInstructionType;
use super::types::{
    AccountRef, RawInstruction, MAX_SEED_LEN, SYSTEM_PROGRAM_ID, SYSVAR_RECENT_BLOCKHASHES,
    SYSVAR_RENT,
};
use super::{key_at, require_accounts, to_info_map};
use crate::codec::{InstructionReader, InstructionWriter};
use crate::error::CodecError;
use crate::pubkey::{serde_base58, Pubkey};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Typed parameters for every System instruction.
///
/// The decoder returns this same type, so everything reconstructable from the
/// wire survives an encode/decode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SystemInstructionParams {
    /// Accounts: [from (signer, writable), new_account (signer, writable)]
    CreateAccount {
        #[serde(with = "serde_base58")]
        from: Pubkey,
        #[serde(with = "serde_base58")]
        new_account: Pubkey,
        lamports: u64,
        space: u64,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// Accounts: [account (signer, writable)]
    Assign {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// Accounts: [from (signer, writable), to (writable)]
    Transfer {
        #[serde(with = "serde_base58")]
        from: Pubkey,
        #[serde(with = "serde_base58")]
        to: Pubkey,
        lamports: u64,
    },

    /// Accounts: [from (signer, writable), new_account (writable), base (signer)]
    ///
    /// `base` is left out of the account list when it equals `from`.
    CreateAccountWithSeed {
        #[serde(with = "serde_base58")]
        from: Pubkey,
        #[serde(with = "serde_base58")]
        new_account: Pubkey,
        #[serde(with = "serde_base58")]
        base: Pubkey,
        seed: String,
        lamports: u64,
        space: u64,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// Accounts: [nonce (writable), recent_blockhashes_sysvar, authority (signer)]
    AdvanceNonceAccount {
        #[serde(with = "serde_base58")]
        nonce: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
    },

    /// Accounts: [nonce (writable), to (writable), recent_blockhashes_sysvar, rent_sysvar, authority (signer)]
    WithdrawNonceAccount {
        #[serde(with = "serde_base58")]
        nonce: Pubkey,
        #[serde(with = "serde_base58")]
        to: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        lamports: u64,
    },

    /// Accounts: [nonce (writable), recent_blockhashes_sysvar, rent_sysvar]
    InitializeNonceAccount {
        #[serde(with = "serde_base58")]
        nonce: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
    },

    /// Accounts: [nonce (writable), authority (signer)]
    AuthorizeNonceAccount {
        #[serde(with = "serde_base58")]
        nonce: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(with = "serde_base58")]
        new_authority: Pubkey,
    },

    /// Accounts: [account (signer, writable)]
    Allocate {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        space: u64,
    },

    /// Accounts: [account (writable), base (signer)]
    AllocateWithSeed {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        base: Pubkey,
        seed: String,
        space: u64,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// Accounts: [account (writable), base (signer)]
    AssignWithSeed {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        base: Pubkey,
        seed: String,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// Accounts: [from (writable), base (signer), to (writable)]
    TransferWithSeed {
        #[serde(with = "serde_base58")]
        from: Pubkey,
        #[serde(with = "serde_base58")]
        base: Pubkey,
        #[serde(with = "serde_base58")]
        to: Pubkey,
        lamports: u64,
        seed: String,
        #[serde(with = "serde_base58")]
        from_owner: Pubkey,
    },
}

impl SystemInstructionParams {
    /// Get the instruction type.
    pub fn instruction_type(&self) -> SystemInstructionType {
        match self {
            Self::CreateAccount { .. } => SystemInstructionType::CreateAccount,
            Self::Assign { .. } => SystemInstructionType::Assign,
            Self::Transfer { .. } => SystemInstructionType::Transfer,
            Self::CreateAccountWithSeed { .. } => SystemInstructionType::CreateAccountWithSeed,
            Self::AdvanceNonceAccount { .. } => SystemInstructionType::AdvanceNonceAccount,
            Self::WithdrawNonceAccount { .. } => SystemInstructionType::WithdrawNonceAccount,
            Self::InitializeNonceAccount { .. } => SystemInstructionType::InitializeNonceAccount,
            Self::AuthorizeNonceAccount { .. } => SystemInstructionType::AuthorizeNonceAccount,
            Self::Allocate { .. } => SystemInstructionType::Allocate,
            Self::AllocateWithSeed { .. } => SystemInstructionType::AllocateWithSeed,
            Self::AssignWithSeed { .. } => SystemInstructionType::AssignWithSeed,
            Self::TransferWithSeed { .. } => SystemInstructionType::TransferWithSeed,
        }
    }

    fn seed(&self) -> Option<&str> {
        match self {
            Self::CreateAccountWithSeed { seed, .. }
            | Self::AllocateWithSeed { seed, .. }
            | Self::AssignWithSeed { seed, .. }
            | Self::TransferWithSeed { seed, .. } => Some(seed),
            _ => None,
        }
    }

    /// Check structural preconditions without producing any bytes.
    pub fn validate(&self) -> Result<(), CodecError> {
        if let Some(seed) = self.seed() {
            if seed.len() > MAX_SEED_LEN {
                return Err(CodecError::invalid_parameter(
                    self.instruction_type().as_str(),
                    format!(
                        "seed is {} bytes, at most {} are allowed",
                        seed.len(),
                        MAX_SEED_LEN
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Encode into a System Program instruction.
    pub fn encode(&self) -> Result<RawInstruction, CodecError> {
        self.validate()?;

        let ty = self.instruction_type();
        log::trace!("encoding system instruction {}", ty.as_str());

        let mut w = InstructionWriter::with_capacity(ty.data_len().unwrap_or(128));
        w.write_u32(ty.tag());

        let accounts = match self {
            Self::CreateAccount {
                from,
                new_account,
                lamports,
                space,
                owner,
            } => {
                w.write_u64(*lamports).write_u64(*space).write_pubkey(owner);
                vec![AccountRef::new(*from, true), AccountRef::new(*new_account, true)]
            }
            Self::Assign { account, owner } => {
                w.write_pubkey(owner);
                vec![AccountRef::new(*account, true)]
            }
            Self::Transfer { from, to, lamports } => {
                w.write_u64(*lamports);
                vec![AccountRef::new(*from, true), AccountRef::new(*to, false)]
            }
            Self::CreateAccountWithSeed {
                from,
                new_account,
                base,
                seed,
                lamports,
                space,
                owner,
            } => {
                w.write_pubkey(base)
                    .write_string(seed)
                    .write_u64(*lamports)
                    .write_u64(*space)
                    .write_pubkey(owner);
                let mut accounts = vec![
                    AccountRef::new(*from, true),
                    AccountRef::new(*new_account, false),
                ];
                if base != from {
                    accounts.push(AccountRef::new_readonly(*base, true));
                }
                accounts
            }
            Self::AdvanceNonceAccount { nonce, authority } => vec![
                AccountRef::new(*nonce, false),
                AccountRef::new_readonly(SYSVAR_RECENT_BLOCKHASHES, false),
                AccountRef::new_readonly(*authority, true),
            ],
            Self::WithdrawNonceAccount {
                nonce,
                to,
                authority,
                lamports,
            } => {
                w.write_u64(*lamports);
                vec![
                    AccountRef::new(*nonce, false),
                    AccountRef::new(*to, false),
                    AccountRef::new_readonly(SYSVAR_RECENT_BLOCKHASHES, false),
                    AccountRef::new_readonly(SYSVAR_RENT, false),
                    AccountRef::new_readonly(*authority, true),
                ]
            }
            Self::InitializeNonceAccount { nonce, authority } => {
                w.write_pubkey(authority);
                vec![
                    AccountRef::new(*nonce, false),
                    AccountRef::new_readonly(SYSVAR_RECENT_BLOCKHASHES, false),
                    AccountRef::new_readonly(SYSVAR_RENT, false),
                ]
            }
            Self::AuthorizeNonceAccount {
                nonce,
                authority,
                new_authority,
            } => {
                w.write_pubkey(new_authority);
                vec![
                    AccountRef::new(*nonce, false),
                    AccountRef::new_readonly(*authority, true),
                ]
            }
            Self::Allocate { account, space } => {
                w.write_u64(*space);
                vec![AccountRef::new(*account, true)]
            }
            Self::AllocateWithSeed {
                account,
                base,
                seed,
                space,
                owner,
            } => {
                w.write_pubkey(base)
                    .write_string(seed)
                    .write_u64(*space)
                    .write_pubkey(owner);
                vec![
                    AccountRef::new(*account, false),
                    AccountRef::new_readonly(*base, true),
                ]
            }
            Self::AssignWithSeed {
                account,
                base,
                seed,
                owner,
            } => {
                w.write_pubkey(base).write_string(seed).write_pubkey(owner);
                vec![
                    AccountRef::new(*account, false),
                    AccountRef::new_readonly(*base, true),
                ]
            }
            Self::TransferWithSeed {
                from,
                base,
                to,
                lamports,
                seed,
                from_owner,
            } => {
                w.write_u64(*lamports)
                    .write_string(seed)
                    .write_pubkey(from_owner);
                vec![
                    AccountRef::new(*from, false),
                    AccountRef::new_readonly(*base, true),
                    AccountRef::new(*to, false),
                ]
            }
        };

        Ok(RawInstruction {
            program_id: SYSTEM_PROGRAM_ID,
            accounts,
            data: w.into_bytes(),
        })
    }

    /// Decode a System Program instruction.
    ///
    /// Returns `Ok(None)` for a tag with no registered variant.
    pub fn decode(data: &[u8], accounts: &[Pubkey]) -> Result<Option<Self>, CodecError> {
        let mut r = InstructionReader::new(data, "system");
        let tag = r.read_u32("tag")?;
        let Some(ty) = SystemInstructionType::from_tag(tag) else {
            log::debug!("unregistered system instruction tag {}", tag);
            return Ok(None);
        };
        let variant = ty.as_str();
        r.set_variant(variant);

        let params = match ty {
            SystemInstructionType::CreateAccount => {
                let lamports = r.read_u64("lamports")?;
                let space = r.read_u64("space")?;
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::CreateAccount {
                    from: accounts[0],
                    new_account: accounts[1],
                    lamports,
                    space,
                    owner,
                }
            }
            SystemInstructionType::Assign => {
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::Assign {
                    account: accounts[0],
                    owner,
                }
            }
            SystemInstructionType::Transfer => {
                let lamports = r.read_u64("lamports")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::Transfer {
                    from: accounts[0],
                    to: accounts[1],
                    lamports,
                }
            }
            SystemInstructionType::CreateAccountWithSeed => {
                let base = r.read_pubkey("base")?;
                let seed = r.read_string("seed")?;
                let lamports = r.read_u64("lamports")?;
                let space = r.read_u64("space")?;
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::CreateAccountWithSeed {
                    from: accounts[0],
                    new_account: accounts[1],
                    base,
                    seed,
                    lamports,
                    space,
                    owner,
                }
            }
            SystemInstructionType::AdvanceNonceAccount => {
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::AdvanceNonceAccount {
                    nonce: accounts[0],
                    authority: accounts[2],
                }
            }
            SystemInstructionType::WithdrawNonceAccount => {
                let lamports = r.read_u64("lamports")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::WithdrawNonceAccount {
                    nonce: accounts[0],
                    to: accounts[1],
                    authority: accounts[4],
                    lamports,
                }
            }
            SystemInstructionType::InitializeNonceAccount => {
                let authority = r.read_pubkey("authority")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::InitializeNonceAccount {
                    nonce: accounts[0],
                    authority,
                }
            }
            SystemInstructionType::AuthorizeNonceAccount => {
                let new_authority = r.read_pubkey("newAuthority")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::AuthorizeNonceAccount {
                    nonce: accounts[0],
                    authority: accounts[1],
                    new_authority,
                }
            }
            SystemInstructionType::Allocate => {
                let space = r.read_u64("space")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::Allocate {
                    account: accounts[0],
                    space,
                }
            }
            SystemInstructionType::AllocateWithSeed => {
                let base = r.read_pubkey("base")?;
                let seed = r.read_string("seed")?;
                let space = r.read_u64("space")?;
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::AllocateWithSeed {
                    account: accounts[0],
                    base,
                    seed,
                    space,
                    owner,
                }
            }
            SystemInstructionType::AssignWithSeed => {
                let base = r.read_pubkey("base")?;
                let seed = r.read_string("seed")?;
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::AssignWithSeed {
                    account: accounts[0],
                    base,
                    seed,
                    owner,
                }
            }
            SystemInstructionType::TransferWithSeed => {
                let lamports = r.read_u64("lamports")?;
                let seed = r.read_string("seed")?;
                let from_owner = r.read_pubkey("fromOwner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::TransferWithSeed {
                    from: accounts[0],
                    base: accounts[1],
                    to: accounts[2],
                    lamports,
                    seed,
                    from_owner,
                }
            }
        };

        Ok(Some(params))
    }

    /// Presentation fields for parsed output.
    ///
    /// Sysvar entries are read from `accounts` as recorded on chain.
    pub fn info(&self, accounts: &[Pubkey]) -> Map<String, Value> {
        let info = match self {
            Self::CreateAccount {
                from,
                new_account,
                lamports,
                space,
                owner,
            } => json!({
                "source": from.to_string(),
                "newAccount": new_account.to_string(),
                "lamports": lamports,
                "space": space,
                "owner": owner.to_string(),
            }),
            Self::Assign { account, owner } => json!({
                "account": account.to_string(),
                "owner": owner.to_string(),
            }),
            Self::Transfer { from, to, lamports } => json!({
                "source": from.to_string(),
                "destination": to.to_string(),
                "lamports": lamports,
            }),
            Self::CreateAccountWithSeed {
                from,
                new_account,
                base,
                seed,
                lamports,
                space,
                owner,
            } => json!({
                "source": from.to_string(),
                "newAccount": new_account.to_string(),
                "base": base.to_string(),
                "seed": seed,
                "lamports": lamports,
                "space": space,
                "owner": owner.to_string(),
            }),
            Self::AdvanceNonceAccount { nonce, authority } => json!({
                "nonceAccount": nonce.to_string(),
                "recentBlockhashesSysvar": key_at(accounts, 1),
                "nonceAuthority": authority.to_string(),
            }),
            Self::WithdrawNonceAccount {
                nonce,
                to,
                authority,
                lamports,
            } => json!({
                "nonceAccount": nonce.to_string(),
                "destination": to.to_string(),
                "recentBlockhashesSysvar": key_at(accounts, 2),
                "rentSysvar": key_at(accounts, 3),
                "nonceAuthority": authority.to_string(),
                "lamports": lamports,
            }),
            Self::InitializeNonceAccount { nonce, authority } => json!({
                "nonceAccount": nonce.to_string(),
                "recentBlockhashesSysvar": key_at(accounts, 1),
                "rentSysvar": key_at(accounts, 2),
                "nonceAuthority": authority.to_string(),
            }),
            Self::AuthorizeNonceAccount {
                nonce,
                authority,
                new_authority,
            } => json!({
                "nonceAccount": nonce.to_string(),
                "nonceAuthority": authority.to_string(),
                "newAuthorized": new_authority.to_string(),
            }),
            Self::Allocate { account, space } => json!({
                "account": account.to_string(),
                "space": space,
            }),
            Self::AllocateWithSeed {
                account,
                base,
                seed,
                space,
                owner,
            } => json!({
                "account": account.to_string(),
                "base": base.to_string(),
                "seed": seed,
                "space": space,
                "owner": owner.to_string(),
            }),
            Self::AssignWithSeed {
                account,
                base,
                seed,
                owner,
            } => json!({
                "account": account.to_string(),
                "base": base.to_string(),
                "seed": seed,
                "owner": owner.to_string(),
            }),
            Self::TransferWithSeed {
                from,
                base,
                to,
                lamports,
                seed,
                from_owner,
            } => json!({
                "source": from.to_string(),
                "sourceBase": base.to_string(),
                "destination": to.to_string(),
                "lamports": lamports,
                "sourceSeed": seed,
                "sourceOwner": from_owner.to_string(),
            }),
        };
        to_info_map(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use solana_system_interface::instruction::SystemInstruction as OfficialSystemInstruction;

    fn key(n: u8) -> Pubkey {
        Pubkey::from([n; 32])
    }

    fn round_trip(params: &SystemInstructionParams) -> SystemInstructionParams {
        let ix = params.encode().unwrap();
        SystemInstructionParams::decode(&ix.data, &ix.account_keys())
            .unwrap()
            .unwrap()
    }

    fn all_variants() -> Vec<SystemInstructionParams> {
        vec![
            SystemInstructionParams::CreateAccount {
                from: key(1),
                new_account: key(2),
                lamports: 1_000_000,
                space: 165,
                owner: key(3),
            },
            SystemInstructionParams::Assign {
                account: key(1),
                owner: key(3),
            },
            SystemInstructionParams::Transfer {
                from: key(1),
                to: key(2),
                lamports: 100_000,
            },
            SystemInstructionParams::CreateAccountWithSeed {
                from: key(1),
                new_account: key(2),
                base: key(4),
                seed: "stake:0".to_string(),
                lamports: 42,
                space: 200,
                owner: key(3),
            },
            SystemInstructionParams::AdvanceNonceAccount {
                nonce: key(5),
                authority: key(1),
            },
            SystemInstructionParams::WithdrawNonceAccount {
                nonce: key(5),
                to: key(2),
                authority: key(1),
                lamports: 7,
            },
            SystemInstructionParams::InitializeNonceAccount {
                nonce: key(5),
                authority: key(1),
            },
            SystemInstructionParams::AuthorizeNonceAccount {
                nonce: key(5),
                authority: key(1),
                new_authority: key(6),
            },
            SystemInstructionParams::Allocate {
                account: key(1),
                space: 1024,
            },
            SystemInstructionParams::AllocateWithSeed {
                account: key(2),
                base: key(4),
                seed: "alloc".to_string(),
                space: 64,
                owner: key(3),
            },
            SystemInstructionParams::AssignWithSeed {
                account: key(2),
                base: key(4),
                seed: "".to_string(),
                owner: key(3),
            },
            SystemInstructionParams::TransferWithSeed {
                from: key(2),
                base: key(4),
                to: key(7),
                lamports: 9_999,
                seed: "vault".to_string(),
                from_owner: key(3),
            },
        ]
    }

    #[test]
    fn test_round_trip_every_variant() {
        let variants = all_variants();
        assert_eq!(variants.len(), SystemInstructionType::ALL.len());
        for params in variants {
            assert_eq!(round_trip(&params), params);
        }
    }

    #[test]
    fn test_fixed_layouts_match_registry() {
        for params in all_variants() {
            let ty = params.instruction_type();
            let ix = params.encode().unwrap();
            assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
            assert_eq!(&ix.data[..4], &ty.tag().to_le_bytes());
            if let Some(len) = ty.data_len() {
                assert_eq!(ix.data.len(), len, "{}", ty.as_str());
            }
            assert!(ix.accounts.len() >= ty.min_accounts());
        }
    }

    #[test]
    fn test_transfer_wire_format() {
        let ix = SystemInstructionParams::Transfer {
            from: key(1),
            to: key(2),
            lamports: 100_000,
        }
        .encode()
        .unwrap();
        assert_eq!(ix.data, [2, 0, 0, 0, 160, 134, 1, 0, 0, 0, 0, 0]);
        assert_eq!(
            ix.accounts,
            vec![AccountRef::new(key(1), true), AccountRef::new(key(2), false)]
        );
    }

    #[test]
    fn test_create_account_is_52_bytes() {
        let ix = all_variants()[0].encode().unwrap();
        assert_eq!(ix.data.len(), 52);
        assert!(ix.accounts.iter().all(|a| a.is_signer && a.is_writable));
    }

    #[test]
    fn test_seed_base_omitted_when_equal_to_from() {
        let same = SystemInstructionParams::CreateAccountWithSeed {
            from: key(1),
            new_account: key(2),
            base: key(1),
            seed: "s".to_string(),
            lamports: 1,
            space: 0,
            owner: key(3),
        };
        let ix = same.encode().unwrap();
        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(round_trip(&same), same);

        let different = SystemInstructionParams::CreateAccountWithSeed {
            from: key(1),
            new_account: key(2),
            base: key(4),
            seed: "s".to_string(),
            lamports: 1,
            space: 0,
            owner: key(3),
        };
        let ix = different.encode().unwrap();
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[2], AccountRef::new_readonly(key(4), true));
    }

    #[test]
    fn test_nonce_accounts_use_sysvars() {
        let ix = SystemInstructionParams::WithdrawNonceAccount {
            nonce: key(5),
            to: key(2),
            authority: key(1),
            lamports: 7,
        }
        .encode()
        .unwrap();
        assert_eq!(ix.accounts[2].pubkey, SYSVAR_RECENT_BLOCKHASHES);
        assert_eq!(ix.accounts[3].pubkey, SYSVAR_RENT);
        assert_eq!(ix.accounts[4], AccountRef::new_readonly(key(1), true));
    }

    #[test]
    fn test_seed_too_long_is_rejected() {
        let params = SystemInstructionParams::AssignWithSeed {
            account: key(2),
            base: key(4),
            seed: "x".repeat(MAX_SEED_LEN + 1),
            owner: key(3),
        };
        assert!(matches!(
            params.encode(),
            Err(CodecError::InvalidParameter {
                variant: "assignWithSeed",
                ..
            })
        ));
    }

    #[rstest]
    #[case(vec![12, 0, 0, 0])]
    #[case(vec![255, 0, 0, 0, 1, 2, 3])]
    fn test_unknown_tag_is_not_an_error(#[case] data: Vec<u8>) {
        assert_eq!(SystemInstructionParams::decode(&data, &[key(1)]), Ok(None));
    }

    #[test]
    fn test_short_tag_is_truncated() {
        assert!(matches!(
            SystemInstructionParams::decode(&[2, 0], &[]),
            Err(CodecError::TruncatedData { field: "tag", .. })
        ));
    }

    #[test]
    fn test_truncated_transfer() {
        let data = [2, 0, 0, 0, 160, 134, 1];
        assert_eq!(
            SystemInstructionParams::decode(&data, &[key(1), key(2)]),
            Err(CodecError::TruncatedData {
                variant: "transfer",
                field: "lamports",
                needed: 8,
                remaining: 3,
            })
        );
    }

    #[test]
    fn test_missing_accounts_is_malformed() {
        let ix = all_variants()[5].encode().unwrap();
        let keys = ix.account_keys();
        assert_eq!(
            SystemInstructionParams::decode(&ix.data, &keys[..4]),
            Err(CodecError::MalformedAccountList {
                variant: "withdrawFromNonce",
                expected: 5,
                actual: 4,
            })
        );
    }

    #[test]
    fn test_info_labels() {
        let params = all_variants()[11].clone();
        let ix = params.encode().unwrap();
        let info = params.info(&ix.account_keys());
        assert_eq!(info["source"], key(2).to_string());
        assert_eq!(info["sourceBase"], key(4).to_string());
        assert_eq!(info["destination"], key(7).to_string());
        assert_eq!(info["lamports"], 9_999);
        assert_eq!(info["sourceSeed"], "vault");
        assert_eq!(info["sourceOwner"], key(3).to_string());

        let params = all_variants()[4].clone();
        let ix = params.encode().unwrap();
        let info = params.info(&ix.account_keys());
        assert_eq!(
            info["recentBlockhashesSysvar"],
            "SysvarRecentB1ockHashes11111111111111111111"
        );
    }

    #[test]
    fn test_matches_official_encoding() {
        let official = |ix: &OfficialSystemInstruction| bincode::serialize(ix).unwrap();

        let cases = vec![
            (
                all_variants()[0].clone(),
                official(&OfficialSystemInstruction::CreateAccount {
                    lamports: 1_000_000,
                    space: 165,
                    owner: [3u8; 32].into(),
                }),
            ),
            (
                all_variants()[2].clone(),
                official(&OfficialSystemInstruction::Transfer { lamports: 100_000 }),
            ),
            (
                all_variants()[3].clone(),
                official(&OfficialSystemInstruction::CreateAccountWithSeed {
                    base: [4u8; 32].into(),
                    seed: "stake:0".to_string(),
                    lamports: 42,
                    space: 200,
                    owner: [3u8; 32].into(),
                }),
            ),
            (
                all_variants()[4].clone(),
                official(&OfficialSystemInstruction::AdvanceNonceAccount),
            ),
            (
                all_variants()[5].clone(),
                official(&OfficialSystemInstruction::WithdrawNonceAccount(7)),
            ),
            (
                all_variants()[11].clone(),
                official(&OfficialSystemInstruction::TransferWithSeed {
                    lamports: 9_999,
                    from_seed: "vault".to_string(),
                    from_owner: [3u8; 32].into(),
                }),
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(
                params.encode().unwrap().data,
                expected,
                "{}",
                params.instruction_type().as_str()
            );
        }
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "type": "createAccountWithSeed",
            "from": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
            "newAccount": "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB",
            "base": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
            "seed": "stake:0",
            "lamports": 5000,
            "space": 200,
            "owner": "Stake11111111111111111111111111111111111111"
        }"#;
        let params: SystemInstructionParams = serde_json::from_str(json).unwrap();
        assert_eq!(
            params.instruction_type(),
            SystemInstructionType::CreateAccountWithSeed
        );
        assert_eq!(params.encode().unwrap().accounts.len(), 2);
    }
}
