//! SPL Token Program instructions.
//!
//! Payloads are a u8 tag followed by the variant's fields. Variants that move
//! or gate tokens end their account list with an authority block: a single
//! signing authority, or a multisig account followed by its signers (see
//! [`Authority`](super::Authority)).
//!
//! Token-2022 shares this layout for tags 0 through 16 and decodes through the
//! same path.

use super::amount::UiTokenAmount;
use super::authority::{check_signers, push_authority, Authority};
use super::registry::TokenInstructionType;
use super::types::{AccountRef, RawInstruction, MAX_SIGNERS, SYSVAR_RENT, TOKEN_PROGRAM_ID};
use super::{key_at, require_accounts, to_info_map};
use crate::codec::{InstructionReader, InstructionWriter};
use crate::error::CodecError;
use crate::pubkey::{serde_base58, serde_base58_option, serde_base58_vec, Pubkey};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Which authority a `SetAuthority` instruction replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum AuthorityType {
    MintTokens = 0,
    FreezeAccount = 1,
    AccountOwner = 2,
    CloseAccount = 3,
}

impl AuthorityType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::MintTokens),
            1 => Some(Self::FreezeAccount),
            2 => Some(Self::AccountOwner),
            3 => Some(Self::CloseAccount),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MintTokens => "mintTokens",
            Self::FreezeAccount => "freezeAccount",
            Self::AccountOwner => "accountOwner",
            Self::CloseAccount => "closeAccount",
        }
    }

    /// Mint-level authorities are set on the mint; the rest on a token account.
    fn targets_mint(self) -> bool {
        matches!(self, Self::MintTokens | Self::FreezeAccount)
    }
}

/// Typed parameters for every SPL Token instruction.
///
/// For variants with an authority block, a non-empty `signers` list makes
/// the authority a multisig account that does not sign itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TokenInstructionParams {
    InitializeMint {
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        decimals: u8,
        #[serde(with = "serde_base58")]
        mint_authority: Pubkey,
        #[serde(default, with = "serde_base58_option")]
        freeze_authority: Option<Pubkey>,
    },

    InitializeAccount {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },

    /// `m` of the listed signers must approve.
    InitializeMultisig {
        #[serde(with = "serde_base58")]
        multisig: Pubkey,
        #[serde(with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        m: u8,
    },

    Transfer {
        #[serde(with = "serde_base58")]
        source: Pubkey,
        #[serde(with = "serde_base58")]
        destination: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
    },

    Approve {
        #[serde(with = "serde_base58")]
        source: Pubkey,
        #[serde(with = "serde_base58")]
        delegate: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
    },

    Revoke {
        #[serde(with = "serde_base58")]
        source: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
    },

    /// `owned` is the mint or token account whose authority changes.
    SetAuthority {
        #[serde(with = "serde_base58")]
        owned: Pubkey,
        authority_type: AuthorityType,
        #[serde(default, with = "serde_base58_option")]
        new_authority: Option<Pubkey>,
        #[serde(with = "serde_base58")]
        current_authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
    },

    MintTo {
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        destination: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
    },

    Burn {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
    },

    CloseAccount {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        destination: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
    },

    FreezeAccount {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
    },

    ThawAccount {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
    },

    TransferChecked {
        #[serde(with = "serde_base58")]
        source: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        destination: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
        decimals: u8,
    },

    ApproveChecked {
        #[serde(with = "serde_base58")]
        source: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        delegate: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
        decimals: u8,
    },

    MintToChecked {
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        destination: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
        decimals: u8,
    },

    BurnChecked {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        authority: Pubkey,
        #[serde(default, with = "serde_base58_vec")]
        signers: Vec<Pubkey>,
        amount: u64,
        decimals: u8,
    },

    /// Like `InitializeAccount`, but the owner travels in the payload.
    InitializeAccount2 {
        #[serde(with = "serde_base58")]
        account: Pubkey,
        #[serde(with = "serde_base58")]
        mint: Pubkey,
        #[serde(with = "serde_base58")]
        owner: Pubkey,
    },
}

impl TokenInstructionParams {
    pub fn instruction_type(&self) -> TokenInstructionType {
        match self {
            Self::InitializeMint { .. } => TokenInstructionType::InitializeMint,
            Self::InitializeAccount { .. } => TokenInstructionType::InitializeAccount,
            Self::InitializeMultisig { .. } => TokenInstructionType::InitializeMultisig,
            Self::Transfer { .. } => TokenInstructionType::Transfer,
            Self::Approve { .. } => TokenInstructionType::Approve,
            Self::Revoke { .. } => TokenInstructionType::Revoke,
            Self::SetAuthority { .. } => TokenInstructionType::SetAuthority,
            Self::MintTo { .. } => TokenInstructionType::MintTo,
            Self::Burn { .. } => TokenInstructionType::Burn,
            Self::CloseAccount { .. } => TokenInstructionType::CloseAccount,
            Self::FreezeAccount { .. } => TokenInstructionType::FreezeAccount,
            Self::ThawAccount { .. } => TokenInstructionType::ThawAccount,
            Self::TransferChecked { .. } => TokenInstructionType::TransferChecked,
            Self::ApproveChecked { .. } => TokenInstructionType::ApproveChecked,
            Self::MintToChecked { .. } => TokenInstructionType::MintToChecked,
            Self::BurnChecked { .. } => TokenInstructionType::BurnChecked,
            Self::InitializeAccount2 { .. } => TokenInstructionType::InitializeAccount2,
        }
    }

    /// The authority and extra signers closing the account list, if any.
    pub fn authority(&self) -> Option<(&Pubkey, &[Pubkey])> {
        match self {
            Self::Transfer {
                authority, signers, ..
            }
            | Self::MintTo {
                authority, signers, ..
            }
            | Self::Burn {
                authority, signers, ..
            }
            | Self::FreezeAccount {
                authority, signers, ..
            }
            | Self::ThawAccount {
                authority, signers, ..
            }
            | Self::TransferChecked {
                authority, signers, ..
            }
            | Self::MintToChecked {
                authority, signers, ..
            }
            | Self::BurnChecked {
                authority, signers, ..
            } => Some((authority, signers)),
            Self::Approve { owner, signers, .. }
            | Self::Revoke { owner, signers, .. }
            | Self::CloseAccount { owner, signers, .. }
            | Self::ApproveChecked { owner, signers, .. } => Some((owner, signers)),
            Self::SetAuthority {
                current_authority,
                signers,
                ..
            } => Some((current_authority, signers)),
            Self::InitializeMint { .. }
            | Self::InitializeAccount { .. }
            | Self::InitializeMultisig { .. }
            | Self::InitializeAccount2 { .. } => None,
        }
    }

    /// Check structural preconditions without producing any bytes.
    pub fn validate(&self) -> Result<(), CodecError> {
        let variant = self.instruction_type().as_str();

        if let Self::InitializeMultisig { signers, m, .. } = self {
            let n = signers.len();
            if !(1..=MAX_SIGNERS).contains(&n) {
                return Err(CodecError::invalid_parameter(
                    variant,
                    format!("expected 1 to {} signers, got {}", MAX_SIGNERS, n),
                ));
            }
            if *m == 0 || usize::from(*m) > n {
                return Err(CodecError::invalid_parameter(
                    variant,
                    format!("m must be between 1 and {}, got {}", n, m),
                ));
            }
        }

        if let Some((_, signers)) = self.authority() {
            check_signers(variant, signers)?;
        }
        Ok(())
    }

    /// Encode into an SPL Token instruction.
    pub fn encode(&self) -> Result<RawInstruction, CodecError> {
        self.validate()?;

        let ty = self.instruction_type();
        log::trace!("encoding token instruction {}", ty.as_str());

        let mut w = InstructionWriter::with_capacity(ty.data_len());
        w.write_u8(ty.tag());

        let mut accounts = match self {
            Self::InitializeMint {
                mint,
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                w.write_u8(*decimals)
                    .write_pubkey(mint_authority)
                    .write_optional_pubkey(freeze_authority.as_ref());
                vec![
                    AccountRef::new(*mint, false),
                    AccountRef::new_readonly(SYSVAR_RENT, false),
                ]
            }
            Self::InitializeAccount {
                account,
                mint,
                owner,
            } => vec![
                AccountRef::new(*account, false),
                AccountRef::new_readonly(*mint, false),
                AccountRef::new_readonly(*owner, false),
                AccountRef::new_readonly(SYSVAR_RENT, false),
            ],
            Self::InitializeMultisig {
                multisig,
                signers,
                m,
            } => {
                w.write_u8(*m);
                let mut accounts = vec![
                    AccountRef::new(*multisig, false),
                    AccountRef::new_readonly(SYSVAR_RENT, false),
                ];
                accounts.extend(signers.iter().map(|s| AccountRef::new_readonly(*s, false)));
                accounts
            }
            Self::Transfer {
                source,
                destination,
                amount,
                ..
            } => {
                w.write_u64(*amount);
                vec![AccountRef::new(*source, false), AccountRef::new(*destination, false)]
            }
            Self::Approve {
                source,
                delegate,
                amount,
                ..
            } => {
                w.write_u64(*amount);
                vec![
                    AccountRef::new(*source, false),
                    AccountRef::new_readonly(*delegate, false),
                ]
            }
            Self::Revoke { source, .. } => vec![AccountRef::new(*source, false)],
            Self::SetAuthority {
                owned,
                authority_type,
                new_authority,
                ..
            } => {
                w.write_u8(*authority_type as u8)
                    .write_optional_pubkey(new_authority.as_ref());
                vec![AccountRef::new(*owned, false)]
            }
            Self::MintTo {
                mint,
                destination,
                amount,
                ..
            } => {
                w.write_u64(*amount);
                vec![AccountRef::new(*mint, false), AccountRef::new(*destination, false)]
            }
            Self::Burn {
                account,
                mint,
                amount,
                ..
            } => {
                w.write_u64(*amount);
                vec![AccountRef::new(*account, false), AccountRef::new(*mint, false)]
            }
            Self::CloseAccount {
                account,
                destination,
                ..
            } => vec![
                AccountRef::new(*account, false),
                AccountRef::new(*destination, false),
            ],
            Self::FreezeAccount { account, mint, .. } | Self::ThawAccount { account, mint, .. } => {
                vec![
                    AccountRef::new(*account, false),
                    AccountRef::new_readonly(*mint, false),
                ]
            }
            Self::TransferChecked {
                source,
                mint,
                destination,
                amount,
                decimals,
                ..
            } => {
                w.write_u64(*amount).write_u8(*decimals);
                vec![
                    AccountRef::new(*source, false),
                    AccountRef::new_readonly(*mint, false),
                    AccountRef::new(*destination, false),
                ]
            }
            Self::ApproveChecked {
                source,
                mint,
                delegate,
                amount,
                decimals,
                ..
            } => {
                w.write_u64(*amount).write_u8(*decimals);
                vec![
                    AccountRef::new(*source, false),
                    AccountRef::new_readonly(*mint, false),
                    AccountRef::new_readonly(*delegate, false),
                ]
            }
            Self::MintToChecked {
                mint,
                destination,
                amount,
                decimals,
                ..
            } => {
                w.write_u64(*amount).write_u8(*decimals);
                vec![AccountRef::new(*mint, false), AccountRef::new(*destination, false)]
            }
            Self::BurnChecked {
                account,
                mint,
                amount,
                decimals,
                ..
            } => {
                w.write_u64(*amount).write_u8(*decimals);
                vec![AccountRef::new(*account, false), AccountRef::new(*mint, false)]
            }
            Self::InitializeAccount2 {
                account,
                mint,
                owner,
            } => {
                w.write_pubkey(owner);
                vec![
                    AccountRef::new(*account, false),
                    AccountRef::new_readonly(*mint, false),
                    AccountRef::new_readonly(SYSVAR_RENT, false),
                ]
            }
        };

        if let Some((authority, signers)) = self.authority() {
            push_authority(&mut accounts, authority, signers);
        }

        Ok(RawInstruction {
            program_id: TOKEN_PROGRAM_ID,
            accounts,
            data: w.into_bytes(),
        })
    }

    /// Decode an SPL Token instruction.
    ///
    /// Returns `Ok(None)` for a tag with no registered variant, and for a
    /// `SetAuthority` whose authority type is not one of the base four.
    pub fn decode(data: &[u8], accounts: &[Pubkey]) -> Result<Option<Self>, CodecError> {
        let mut r = InstructionReader::new(data, "spl-token");
        let tag = r.read_u8("tag")?;
        let Some(ty) = TokenInstructionType::from_tag(tag) else {
            log::debug!("unregistered token instruction tag {}", tag);
            return Ok(None);
        };
        let variant = ty.as_str();
        r.set_variant(variant);

        let params = match ty {
            TokenInstructionType::InitializeMint => {
                let decimals = r.read_u8("decimals")?;
                let mint_authority = r.read_pubkey("mintAuthority")?;
                let freeze_authority = r.read_optional_pubkey("freezeAuthority")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::InitializeMint {
                    mint: accounts[0],
                    decimals,
                    mint_authority,
                    freeze_authority,
                }
            }
            TokenInstructionType::InitializeAccount => {
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::InitializeAccount {
                    account: accounts[0],
                    mint: accounts[1],
                    owner: accounts[2],
                }
            }
            TokenInstructionType::InitializeMultisig => {
                let m = r.read_u8("m")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::InitializeMultisig {
                    multisig: accounts[0],
                    signers: accounts[2..].to_vec(),
                    m,
                }
            }
            TokenInstructionType::Transfer => {
                let amount = r.read_u64("amount")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::Transfer {
                    source: accounts[0],
                    destination: accounts[1],
                    authority,
                    signers,
                    amount,
                }
            }
            TokenInstructionType::Approve => {
                let amount = r.read_u64("amount")?;
                let (owner, signers) = split_authority(ty, accounts)?;
                Self::Approve {
                    source: accounts[0],
                    delegate: accounts[1],
                    owner,
                    signers,
                    amount,
                }
            }
            TokenInstructionType::Revoke => {
                let (owner, signers) = split_authority(ty, accounts)?;
                Self::Revoke {
                    source: accounts[0],
                    owner,
                    signers,
                }
            }
            TokenInstructionType::SetAuthority => {
                let raw_type = r.read_u8("authorityType")?;
                // Token-2022 extensions add authority types this family has no shape for
                let Some(authority_type) = AuthorityType::from_u8(raw_type) else {
                    log::debug!("unregistered token authority type {}", raw_type);
                    return Ok(None);
                };
                let new_authority = r.read_optional_pubkey("newAuthority")?;
                let (current_authority, signers) = split_authority(ty, accounts)?;
                Self::SetAuthority {
                    owned: accounts[0],
                    authority_type,
                    new_authority,
                    current_authority,
                    signers,
                }
            }
            TokenInstructionType::MintTo => {
                let amount = r.read_u64("amount")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::MintTo {
                    mint: accounts[0],
                    destination: accounts[1],
                    authority,
                    signers,
                    amount,
                }
            }
            TokenInstructionType::Burn => {
                let amount = r.read_u64("amount")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::Burn {
                    account: accounts[0],
                    mint: accounts[1],
                    authority,
                    signers,
                    amount,
                }
            }
            TokenInstructionType::CloseAccount => {
                let (owner, signers) = split_authority(ty, accounts)?;
                Self::CloseAccount {
                    account: accounts[0],
                    destination: accounts[1],
                    owner,
                    signers,
                }
            }
            TokenInstructionType::FreezeAccount => {
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::FreezeAccount {
                    account: accounts[0],
                    mint: accounts[1],
                    authority,
                    signers,
                }
            }
            TokenInstructionType::ThawAccount => {
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::ThawAccount {
                    account: accounts[0],
                    mint: accounts[1],
                    authority,
                    signers,
                }
            }
            TokenInstructionType::TransferChecked => {
                let amount = r.read_u64("amount")?;
                let decimals = r.read_u8("decimals")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::TransferChecked {
                    source: accounts[0],
                    mint: accounts[1],
                    destination: accounts[2],
                    authority,
                    signers,
                    amount,
                    decimals,
                }
            }
            TokenInstructionType::ApproveChecked => {
                let amount = r.read_u64("amount")?;
                let decimals = r.read_u8("decimals")?;
                let (owner, signers) = split_authority(ty, accounts)?;
                Self::ApproveChecked {
                    source: accounts[0],
                    mint: accounts[1],
                    delegate: accounts[2],
                    owner,
                    signers,
                    amount,
                    decimals,
                }
            }
            TokenInstructionType::MintToChecked => {
                let amount = r.read_u64("amount")?;
                let decimals = r.read_u8("decimals")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::MintToChecked {
                    mint: accounts[0],
                    destination: accounts[1],
                    authority,
                    signers,
                    amount,
                    decimals,
                }
            }
            TokenInstructionType::BurnChecked => {
                let amount = r.read_u64("amount")?;
                let decimals = r.read_u8("decimals")?;
                let (authority, signers) = split_authority(ty, accounts)?;
                Self::BurnChecked {
                    account: accounts[0],
                    mint: accounts[1],
                    authority,
                    signers,
                    amount,
                    decimals,
                }
            }
            TokenInstructionType::InitializeAccount2 => {
                let owner = r.read_pubkey("owner")?;
                require_accounts(variant, accounts, ty.min_accounts())?;
                Self::InitializeAccount2 {
                    account: accounts[0],
                    mint: accounts[1],
                    owner,
                }
            }
        };

        Ok(Some(params))
    }

    /// Presentation fields for parsed output.
    ///
    /// The rent sysvar is read from `accounts` as recorded on chain.
    pub fn info(&self, accounts: &[Pubkey]) -> Map<String, Value> {
        let (fields, labels) = match self {
            Self::InitializeMint {
                mint,
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                let mut info = json!({
                    "mint": mint.to_string(),
                    "decimals": decimals,
                    "mintAuthority": mint_authority.to_string(),
                    "rentSysvar": key_at(accounts, 1),
                });
                if let Some(freeze_authority) = freeze_authority {
                    info["freezeAuthority"] = freeze_authority.to_string().into();
                }
                (info, None)
            }
            Self::InitializeAccount {
                account,
                mint,
                owner,
            } => (
                json!({
                    "account": account.to_string(),
                    "mint": mint.to_string(),
                    "owner": owner.to_string(),
                    "rentSysvar": key_at(accounts, 3),
                }),
                None,
            ),
            Self::InitializeMultisig {
                multisig,
                signers,
                m,
            } => (
                json!({
                    "multisig": multisig.to_string(),
                    "rentSysvar": key_at(accounts, 1),
                    "signers": signers.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    "m": m,
                }),
                None,
            ),
            Self::Transfer {
                source,
                destination,
                amount,
                ..
            } => (
                json!({
                    "source": source.to_string(),
                    "destination": destination.to_string(),
                    "amount": amount,
                }),
                Some(("authority", "multisigAuthority")),
            ),
            Self::Approve {
                source,
                delegate,
                amount,
                ..
            } => (
                json!({
                    "source": source.to_string(),
                    "delegate": delegate.to_string(),
                    "amount": amount,
                }),
                Some(("owner", "multisigOwner")),
            ),
            Self::Revoke { source, .. } => (
                json!({ "source": source.to_string() }),
                Some(("owner", "multisigOwner")),
            ),
            Self::SetAuthority {
                owned,
                authority_type,
                new_authority,
                ..
            } => {
                let owned_label = if authority_type.targets_mint() {
                    "mint"
                } else {
                    "account"
                };
                let mut info = json!({
                    "authorityType": authority_type.as_str(),
                    "newAuthority": new_authority.map(|k| k.to_string()),
                });
                info[owned_label] = owned.to_string().into();
                (info, Some(("authority", "multisigAuthority")))
            }
            Self::MintTo {
                mint,
                destination,
                amount,
                ..
            } => (
                json!({
                    "mint": mint.to_string(),
                    "account": destination.to_string(),
                    "amount": amount,
                }),
                Some(("mintAuthority", "multisigMintAuthority")),
            ),
            Self::Burn {
                account,
                mint,
                amount,
                ..
            } => (
                json!({
                    "account": account.to_string(),
                    "mint": mint.to_string(),
                    "amount": amount,
                }),
                Some(("authority", "multisigAuthority")),
            ),
            Self::CloseAccount {
                account,
                destination,
                ..
            } => (
                json!({
                    "account": account.to_string(),
                    "destination": destination.to_string(),
                }),
                Some(("owner", "multisigOwner")),
            ),
            Self::FreezeAccount { account, mint, .. } | Self::ThawAccount { account, mint, .. } => (
                json!({
                    "account": account.to_string(),
                    "mint": mint.to_string(),
                }),
                Some(("freezeAuthority", "multisigFreezeAuthority")),
            ),
            Self::TransferChecked {
                source,
                mint,
                destination,
                amount,
                decimals,
                ..
            } => (
                json!({
                    "source": source.to_string(),
                    "mint": mint.to_string(),
                    "destination": destination.to_string(),
                    "tokenAmount": UiTokenAmount::new(*amount, *decimals),
                }),
                Some(("authority", "multisigAuthority")),
            ),
            Self::ApproveChecked {
                source,
                mint,
                delegate,
                amount,
                decimals,
                ..
            } => (
                json!({
                    "source": source.to_string(),
                    "mint": mint.to_string(),
                    "delegate": delegate.to_string(),
                    "tokenAmount": UiTokenAmount::new(*amount, *decimals),
                }),
                Some(("owner", "multisigOwner")),
            ),
            Self::MintToChecked {
                mint,
                destination,
                amount,
                decimals,
                ..
            } => (
                json!({
                    "mint": mint.to_string(),
                    "account": destination.to_string(),
                    "tokenAmount": UiTokenAmount::new(*amount, *decimals),
                }),
                Some(("mintAuthority", "multisigMintAuthority")),
            ),
            Self::BurnChecked {
                account,
                mint,
                amount,
                decimals,
                ..
            } => (
                json!({
                    "account": account.to_string(),
                    "mint": mint.to_string(),
                    "tokenAmount": UiTokenAmount::new(*amount, *decimals),
                }),
                Some(("authority", "multisigAuthority")),
            ),
            Self::InitializeAccount2 {
                account,
                mint,
                owner,
            } => (
                json!({
                    "account": account.to_string(),
                    "mint": mint.to_string(),
                    "owner": owner.to_string(),
                    "rentSysvar": key_at(accounts, 2),
                }),
                None,
            ),
        };

        let mut info = to_info_map(fields);
        if let (Some((single, multisig)), Some((authority, signers))) = (labels, self.authority()) {
            Authority::from_parts(*authority, signers).write_info(&mut info, single, multisig);
        }
        info
    }
}

/// Split the authority block off `accounts` using the variant's fixed prefix.
///
/// On success the prefix accounts are guaranteed present.
fn split_authority(
    ty: TokenInstructionType,
    accounts: &[Pubkey],
) -> Result<(Pubkey, Vec<Pubkey>), CodecError> {
    let prefix = ty.authority_prefix().unwrap_or(0);
    Authority::resolve(ty.as_str(), accounts, prefix).map(Authority::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use spl_token::instruction::{AuthorityType as SplAuthorityType, TokenInstruction};
    use spl_token::solana_program::program_option::COption;
    use spl_token::solana_program::pubkey::Pubkey as SplPubkey;

    fn key(n: u8) -> Pubkey {
        Pubkey::from([n; 32])
    }

    fn keys(from: u8, count: u8) -> Vec<Pubkey> {
        (from..from + count).map(key).collect()
    }

    fn decode(ix: &RawInstruction) -> TokenInstructionParams {
        TokenInstructionParams::decode(&ix.data, &ix.account_keys())
            .unwrap()
            .unwrap()
    }

    fn all_variants(signers: &[Pubkey]) -> Vec<TokenInstructionParams> {
        let signers = signers.to_vec();
        vec![
            TokenInstructionParams::InitializeMint {
                mint: key(1),
                decimals: 6,
                mint_authority: key(2),
                freeze_authority: Some(key(3)),
            },
            TokenInstructionParams::InitializeAccount {
                account: key(4),
                mint: key(1),
                owner: key(2),
            },
            TokenInstructionParams::InitializeMultisig {
                multisig: key(5),
                signers: keys(20, 3),
                m: 2,
            },
            TokenInstructionParams::Transfer {
                source: key(4),
                destination: key(6),
                authority: key(2),
                signers: signers.clone(),
                amount: 500,
            },
            TokenInstructionParams::Approve {
                source: key(4),
                delegate: key(7),
                owner: key(2),
                signers: signers.clone(),
                amount: 10,
            },
            TokenInstructionParams::Revoke {
                source: key(4),
                owner: key(2),
                signers: signers.clone(),
            },
            TokenInstructionParams::SetAuthority {
                owned: key(1),
                authority_type: AuthorityType::FreezeAccount,
                new_authority: None,
                current_authority: key(2),
                signers: signers.clone(),
            },
            TokenInstructionParams::MintTo {
                mint: key(1),
                destination: key(4),
                authority: key(2),
                signers: signers.clone(),
                amount: 1_000,
            },
            TokenInstructionParams::Burn {
                account: key(4),
                mint: key(1),
                authority: key(2),
                signers: signers.clone(),
                amount: 3,
            },
            TokenInstructionParams::CloseAccount {
                account: key(4),
                destination: key(6),
                owner: key(2),
                signers: signers.clone(),
            },
            TokenInstructionParams::FreezeAccount {
                account: key(4),
                mint: key(1),
                authority: key(3),
                signers: signers.clone(),
            },
            TokenInstructionParams::ThawAccount {
                account: key(4),
                mint: key(1),
                authority: key(3),
                signers: signers.clone(),
            },
            TokenInstructionParams::TransferChecked {
                source: key(4),
                mint: key(1),
                destination: key(6),
                authority: key(2),
                signers: signers.clone(),
                amount: 1_500_000,
                decimals: 6,
            },
            TokenInstructionParams::ApproveChecked {
                source: key(4),
                mint: key(1),
                delegate: key(7),
                owner: key(2),
                signers: signers.clone(),
                amount: 42,
                decimals: 2,
            },
            TokenInstructionParams::MintToChecked {
                mint: key(1),
                destination: key(4),
                authority: key(2),
                signers: signers.clone(),
                amount: 7,
                decimals: 0,
            },
            TokenInstructionParams::BurnChecked {
                account: key(4),
                mint: key(1),
                authority: key(2),
                signers,
                amount: 25,
                decimals: 1,
            },
            TokenInstructionParams::InitializeAccount2 {
                account: key(4),
                mint: key(1),
                owner: key(2),
            },
        ]
    }

    #[rstest]
    #[case::single(0)]
    #[case::two_signers(2)]
    #[case::max_signers(11)]
    fn test_round_trip_every_variant(#[case] signer_count: u8) {
        let variants = all_variants(&keys(40, signer_count));
        assert_eq!(variants.len(), TokenInstructionType::ALL.len());
        for params in variants {
            let ty = params.instruction_type();
            let ix = params.encode().unwrap();
            assert_eq!(ix.data[0], ty.tag());
            assert_eq!(ix.data.len(), ty.data_len(), "{}", ty.as_str());
            assert_eq!(decode(&ix), params, "{}", ty.as_str());
        }
    }

    #[test]
    fn test_transfer_multisig_boundary() {
        let single = TokenInstructionParams::Transfer {
            source: key(4),
            destination: key(6),
            authority: key(2),
            signers: vec![],
            amount: 500,
        };
        let ix = single.encode().unwrap();
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[2], AccountRef::new_readonly(key(2), true));
        let info = decode(&ix).info(&ix.account_keys());
        assert_eq!(info["authority"], key(2).to_string());
        assert!(!info.contains_key("signers"));

        let multisig = TokenInstructionParams::Transfer {
            source: key(4),
            destination: key(6),
            authority: key(2),
            signers: vec![key(8), key(9)],
            amount: 500,
        };
        let ix = multisig.encode().unwrap();
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[2], AccountRef::new_readonly(key(2), false));
        assert!(ix.accounts[3..].iter().all(|a| a.is_signer && !a.is_writable));
        let info = decode(&ix).info(&ix.account_keys());
        assert_eq!(info["multisigAuthority"], key(2).to_string());
        assert_eq!(
            info["signers"],
            json!([key(8).to_string(), key(9).to_string()])
        );
        assert!(!info.contains_key("authority"));
    }

    #[test]
    fn test_truncated_transfer() {
        let data = [3, 1, 2, 3, 4];
        assert_eq!(
            TokenInstructionParams::decode(&data, &keys(1, 3)),
            Err(CodecError::TruncatedData {
                variant: "transfer",
                field: "amount",
                needed: 8,
                remaining: 4,
            })
        );
    }

    #[test]
    fn test_missing_authority_is_malformed() {
        let ix = all_variants(&[])[12].encode().unwrap();
        let accounts = ix.account_keys();
        assert_eq!(
            TokenInstructionParams::decode(&ix.data, &accounts[..3]),
            Err(CodecError::MalformedAccountList {
                variant: "transferChecked",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[rstest]
    #[case::no_signers(0, 1, false)]
    #[case::m_zero(3, 0, false)]
    #[case::m_above_n(3, 4, false)]
    #[case::twelve_signers(12, 1, false)]
    #[case::eleven_signers(11, 11, true)]
    #[case::one_of_one(1, 1, true)]
    fn test_initialize_multisig_bounds(#[case] n: u8, #[case] m: u8, #[case] ok: bool) {
        let params = TokenInstructionParams::InitializeMultisig {
            multisig: key(5),
            signers: keys(20, n),
            m,
        };
        let result = params.encode();
        assert_eq!(result.is_ok(), ok);
        if let Err(err) = result {
            assert!(matches!(
                err,
                CodecError::InvalidParameter {
                    variant: "initializeMultisig",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_initialize_multisig_signers_are_readonly() {
        let ix = all_variants(&[])[2].encode().unwrap();
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[1].pubkey, SYSVAR_RENT);
        assert!(ix.accounts[2..].iter().all(|a| !a.is_signer && !a.is_writable));
    }

    #[test]
    fn test_authority_block_signer_limit() {
        let params = TokenInstructionParams::Burn {
            account: key(4),
            mint: key(1),
            authority: key(2),
            signers: keys(40, 12),
            amount: 1,
        };
        assert!(matches!(
            params.encode(),
            Err(CodecError::InvalidParameter { variant: "burn", .. })
        ));
    }

    #[test]
    fn test_checked_info_scales_amount() {
        let params = all_variants(&[])[12].clone();
        let ix = params.encode().unwrap();
        let info = params.info(&ix.account_keys());
        assert_eq!(
            info["tokenAmount"],
            json!({ "amount": "1500000", "decimals": 6, "uiAmount": 1.5 })
        );
        assert_eq!(info["mint"], key(1).to_string());
    }

    #[test]
    fn test_set_authority_info() {
        let params = all_variants(&[])[6].clone();
        let ix = params.encode().unwrap();
        let info = params.info(&ix.account_keys());
        assert_eq!(info["mint"], key(1).to_string());
        assert_eq!(info["authorityType"], "freezeAccount");
        assert!(info["newAuthority"].is_null());
        assert_eq!(info["authority"], key(2).to_string());

        let params = TokenInstructionParams::SetAuthority {
            owned: key(4),
            authority_type: AuthorityType::CloseAccount,
            new_authority: Some(key(9)),
            current_authority: key(2),
            signers: vec![],
        };
        let info = params.info(&params.encode().unwrap().account_keys());
        assert_eq!(info["account"], key(4).to_string());
        assert_eq!(info["newAuthority"], key(9).to_string());
    }

    #[test]
    fn test_unknown_authority_type_is_not_decoded() {
        for raw_type in [4u8, 9, 255] {
            let mut data = vec![6, raw_type, 0];
            data.extend_from_slice(&[0; 32]);
            assert_eq!(TokenInstructionParams::decode(&data, &keys(1, 2)), Ok(None));
        }
        // the type byte is still required
        assert!(matches!(
            TokenInstructionParams::decode(&[6], &keys(1, 2)),
            Err(CodecError::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_initialize_mint_freeze_authority_only_when_set() {
        let params = TokenInstructionParams::InitializeMint {
            mint: key(1),
            decimals: 9,
            mint_authority: key(2),
            freeze_authority: None,
        };
        let ix = params.encode().unwrap();
        assert_eq!(ix.data.len(), 67);
        let info = params.info(&ix.account_keys());
        assert!(!info.contains_key("freezeAuthority"));
        assert_eq!(info["rentSysvar"], SYSVAR_RENT.to_string());
    }

    #[test]
    fn test_unknown_tag_is_not_an_error() {
        assert_eq!(TokenInstructionParams::decode(&[17], &[]), Ok(None));
        assert_eq!(TokenInstructionParams::decode(&[200, 1, 2], &[]), Ok(None));
    }

    fn spl_key(key: &Pubkey) -> SplPubkey {
        SplPubkey::new_from_array(key.to_bytes())
    }

    #[test]
    fn test_matches_spl_token_packing() {
        let ix = all_variants(&[])[12].encode().unwrap();
        assert_eq!(
            ix.data,
            TokenInstruction::TransferChecked {
                amount: 1_500_000,
                decimals: 6,
            }
            .pack()
        );

        let ix = all_variants(&[])[2].encode().unwrap();
        assert_eq!(ix.data, TokenInstruction::InitializeMultisig { m: 2 }.pack());

        let ix = all_variants(&[])[0].encode().unwrap();
        assert_eq!(
            ix.data,
            TokenInstruction::InitializeMint {
                decimals: 6,
                mint_authority: spl_key(&key(2)),
                freeze_authority: COption::Some(spl_key(&key(3))),
            }
            .pack()
        );

        let params = TokenInstructionParams::SetAuthority {
            owned: key(4),
            authority_type: AuthorityType::AccountOwner,
            new_authority: Some(key(9)),
            current_authority: key(2),
            signers: vec![],
        };
        assert_eq!(
            params.encode().unwrap().data,
            TokenInstruction::SetAuthority {
                authority_type: SplAuthorityType::AccountOwner,
                new_authority: COption::Some(spl_key(&key(9))),
            }
            .pack()
        );
    }

    #[test]
    fn test_decodes_spl_short_initialize_mint() {
        let data = TokenInstruction::InitializeMint {
            decimals: 9,
            mint_authority: spl_key(&key(2)),
            freeze_authority: COption::None,
        }
        .pack();
        assert_eq!(data.len(), 35);

        let params = TokenInstructionParams::decode(&data, &[key(1), SYSVAR_RENT])
            .unwrap()
            .unwrap();
        assert_eq!(
            params,
            TokenInstructionParams::InitializeMint {
                mint: key(1),
                decimals: 9,
                mint_authority: key(2),
                freeze_authority: None,
            }
        );
    }

    #[test]
    fn test_deserialize_from_json_defaults_signers() {
        let json = r#"{
            "type": "transferChecked",
            "source": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
            "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "destination": "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB",
            "authority": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
            "amount": 1000000,
            "decimals": 6
        }"#;
        let params: TokenInstructionParams = serde_json::from_str(json).unwrap();
        let ix = params.encode().unwrap();
        assert_eq!(ix.accounts.len(), 4);
        assert!(ix.accounts[3].is_signer);
    }
}
