//! Instruction tag tables.
//!
//! Tags are dense and zero-based. New variants are only ever appended;
//! renumbering would desync with instructions already on chain.
//!
//! # Wire Format
//!
//! System instructions start with a 4-byte little-endian tag, Token
//! instructions with a single byte.

/// System Program instruction types, indexed by their u32 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SystemInstructionType {
    CreateAccount = 0,
    Assign = 1,
    Transfer = 2,
    CreateAccountWithSeed = 3,
    AdvanceNonceAccount = 4,
    WithdrawNonceAccount = 5,
    InitializeNonceAccount = 6,
    AuthorizeNonceAccount = 7,
    Allocate = 8,
    AllocateWithSeed = 9,
    AssignWithSeed = 10,
    TransferWithSeed = 11,
}

impl SystemInstructionType {
    /// Every registered variant, in tag order.
    pub const ALL: [Self; 12] = [
        Self::CreateAccount,
        Self::Assign,
        Self::Transfer,
        Self::CreateAccountWithSeed,
        Self::AdvanceNonceAccount,
        Self::WithdrawNonceAccount,
        Self::InitializeNonceAccount,
        Self::AuthorizeNonceAccount,
        Self::Allocate,
        Self::AllocateWithSeed,
        Self::AssignWithSeed,
        Self::TransferWithSeed,
    ];

    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    pub fn tag(self) -> u32 {
        self as u32
    }

    /// The instruction type name used in parsed output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateAccount => "createAccount",
            Self::Assign => "assign",
            Self::Transfer => "transfer",
            Self::CreateAccountWithSeed => "createAccountWithSeed",
            Self::AdvanceNonceAccount => "advanceNonce",
            Self::WithdrawNonceAccount => "withdrawFromNonce",
            Self::InitializeNonceAccount => "initializeNonce",
            Self::AuthorizeNonceAccount => "authorizeNonce",
            Self::Allocate => "allocate",
            Self::AllocateWithSeed => "allocateWithSeed",
            Self::AssignWithSeed => "assignWithSeed",
            Self::TransferWithSeed => "transferWithSeed",
        }
    }

    /// Accounts a decoder needs to recover every field.
    ///
    /// `CreateAccountWithSeed` only needs two: the base account is dropped
    /// when it equals the funder, and the base key is also in the payload.
    pub fn min_accounts(self) -> usize {
        match self {
            Self::Assign | Self::Allocate => 1,
            Self::CreateAccount
            | Self::Transfer
            | Self::CreateAccountWithSeed
            | Self::AuthorizeNonceAccount
            | Self::AllocateWithSeed
            | Self::AssignWithSeed => 2,
            Self::AdvanceNonceAccount
            | Self::InitializeNonceAccount
            | Self::TransferWithSeed => 3,
            Self::WithdrawNonceAccount => 5,
        }
    }

    /// Payload length including the tag, or `None` when a seed makes it variable.
    pub fn data_len(self) -> Option<usize> {
        match self {
            Self::CreateAccount => Some(4 + 8 + 8 + 32),
            Self::Assign | Self::InitializeNonceAccount | Self::AuthorizeNonceAccount => {
                Some(4 + 32)
            }
            Self::Transfer | Self::WithdrawNonceAccount | Self::Allocate => Some(4 + 8),
            Self::AdvanceNonceAccount => Some(4),
            Self::CreateAccountWithSeed
            | Self::AllocateWithSeed
            | Self::AssignWithSeed
            | Self::TransferWithSeed => None,
        }
    }
}

/// SPL Token instruction types, indexed by their u8 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenInstructionType {
    InitializeMint = 0,
    InitializeAccount = 1,
    InitializeMultisig = 2,
    Transfer = 3,
    Approve = 4,
    Revoke = 5,
    SetAuthority = 6,
    MintTo = 7,
    Burn = 8,
    CloseAccount = 9,
    FreezeAccount = 10,
    ThawAccount = 11,
    TransferChecked = 12,
    ApproveChecked = 13,
    MintToChecked = 14,
    BurnChecked = 15,
    InitializeAccount2 = 16,
}

impl TokenInstructionType {
    /// Every registered variant, in tag order.
    pub const ALL: [Self; 17] = [
        Self::InitializeMint,
        Self::InitializeAccount,
        Self::InitializeMultisig,
        Self::Transfer,
        Self::Approve,
        Self::Revoke,
        Self::SetAuthority,
        Self::MintTo,
        Self::Burn,
        Self::CloseAccount,
        Self::FreezeAccount,
        Self::ThawAccount,
        Self::TransferChecked,
        Self::ApproveChecked,
        Self::MintToChecked,
        Self::BurnChecked,
        Self::InitializeAccount2,
    ];

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The instruction type name used in parsed output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitializeMint => "initializeMint",
            Self::InitializeAccount => "initializeAccount",
            Self::InitializeMultisig => "initializeMultisig",
            Self::Transfer => "transfer",
            Self::Approve => "approve",
            Self::Revoke => "revoke",
            Self::SetAuthority => "setAuthority",
            Self::MintTo => "mintTo",
            Self::Burn => "burn",
            Self::CloseAccount => "closeAccount",
            Self::FreezeAccount => "freezeAccount",
            Self::ThawAccount => "thawAccount",
            Self::TransferChecked => "transferChecked",
            Self::ApproveChecked => "approveChecked",
            Self::MintToChecked => "mintToChecked",
            Self::BurnChecked => "burnChecked",
            Self::InitializeAccount2 => "initializeAccount2",
        }
    }

    /// Number of fixed accounts preceding the authority/signers block, for
    /// variants that accept a multisig authority.
    pub fn authority_prefix(self) -> Option<usize> {
        match self {
            Self::Revoke | Self::SetAuthority => Some(1),
            Self::Transfer
            | Self::Approve
            | Self::MintTo
            | Self::Burn
            | Self::CloseAccount
            | Self::FreezeAccount
            | Self::ThawAccount
            | Self::MintToChecked
            | Self::BurnChecked => Some(2),
            Self::TransferChecked | Self::ApproveChecked => Some(3),
            Self::InitializeMint
            | Self::InitializeAccount
            | Self::InitializeMultisig
            | Self::InitializeAccount2 => None,
        }
    }

    /// Accounts a decoder needs before it can label every field.
    pub fn min_accounts(self) -> usize {
        match self {
            Self::InitializeMint => 2,
            Self::InitializeAccount => 4,
            // multisig account, rent sysvar and at least one signer
            Self::InitializeMultisig => 3,
            Self::InitializeAccount2 => 3,
            other => other.authority_prefix().map_or(0, |prefix| prefix + 1),
        }
    }

    /// Payload length including the tag.
    pub fn data_len(self) -> usize {
        match self {
            Self::InitializeMint => 1 + 1 + 32 + 1 + 32,
            Self::InitializeAccount
            | Self::Revoke
            | Self::CloseAccount
            | Self::FreezeAccount
            | Self::ThawAccount => 1,
            Self::InitializeMultisig => 1 + 1,
            Self::Transfer | Self::Approve | Self::MintTo | Self::Burn => 1 + 8,
            Self::SetAuthority => 1 + 1 + 1 + 32,
            Self::TransferChecked
            | Self::ApproveChecked
            | Self::MintToChecked
            | Self::BurnChecked => 1 + 8 + 1,
            Self::InitializeAccount2 => 1 + 32,
        }
    }

    /// Whether the payload carries `decimals` for a UI-scaled amount.
    pub fn is_checked(self) -> bool {
        matches!(
            self,
            Self::TransferChecked | Self::ApproveChecked | Self::MintToChecked | Self::BurnChecked
        )
    }
}
