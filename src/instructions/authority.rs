//! Single vs. multisig authority classification.
//!
//! Token instructions end with an authority block: either one signing
//! authority, or a multisig account followed by the signers approving on its
//! behalf. Nothing on the wire distinguishes the two except how many
//! accounts trail the variant's fixed prefix.

use crate::error::CodecError;
use crate::instructions::types::{AccountRef, MAX_SIGNERS};
use crate::pubkey::Pubkey;
use serde_json::{Map, Value};

/// The authority block of a token instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authority {
    Single(Pubkey),
    Multisig { multisig: Pubkey, signers: Vec<Pubkey> },
}

impl Authority {
    /// Classify the accounts after `fixed_prefix_len`.
    pub fn resolve(
        variant: &'static str,
        accounts: &[Pubkey],
        fixed_prefix_len: usize,
    ) -> Result<Self, CodecError> {
        match accounts.get(fixed_prefix_len..) {
            Some([authority]) => Ok(Authority::Single(*authority)),
            Some([multisig, signers @ ..]) => Ok(Authority::Multisig {
                multisig: *multisig,
                signers: signers.to_vec(),
            }),
            _ => Err(CodecError::MalformedAccountList {
                variant,
                expected: fixed_prefix_len + 1,
                actual: accounts.len(),
            }),
        }
    }

    /// Build from encoder parameters: extra signers make it a multisig.
    pub fn from_parts(authority: Pubkey, signers: &[Pubkey]) -> Self {
        if signers.is_empty() {
            Authority::Single(authority)
        } else {
            Authority::Multisig {
                multisig: authority,
                signers: signers.to_vec(),
            }
        }
    }

    /// Split back into the authority key and its extra signers.
    pub fn into_parts(self) -> (Pubkey, Vec<Pubkey>) {
        match self {
            Authority::Single(authority) => (authority, Vec::new()),
            Authority::Multisig { multisig, signers } => (multisig, signers),
        }
    }

    /// Write the labeled authority fields into a parsed `info` map.
    pub fn write_info(&self, info: &mut Map<String, Value>, single_label: &str, multisig_label: &str) {
        match self {
            Authority::Single(authority) => {
                info.insert(single_label.to_string(), authority.to_string().into());
            }
            Authority::Multisig { multisig, signers } => {
                info.insert(multisig_label.to_string(), multisig.to_string().into());
                info.insert(
                    "signers".to_string(),
                    signers.iter().map(|s| Value::from(s.to_string())).collect(),
                );
            }
        }
    }
}

/// Resolve the authority block of `accounts` straight into labeled fields.
pub fn resolve_authority(
    accounts: &[Pubkey],
    fixed_prefix_len: usize,
    single_label: &str,
    multisig_label: &str,
) -> Result<Map<String, Value>, CodecError> {
    let authority = Authority::resolve("authority", accounts, fixed_prefix_len)?;
    let mut fields = Map::new();
    authority.write_info(&mut fields, single_label, multisig_label);
    Ok(fields)
}

/// Check the extra-signer count an encoder is about to emit.
pub(crate) fn check_signers(variant: &'static str, signers: &[Pubkey]) -> Result<(), CodecError> {
    if signers.len() > MAX_SIGNERS {
        return Err(CodecError::invalid_parameter(
            variant,
            format!(
                "at most {} multisig signers are allowed, got {}",
                MAX_SIGNERS,
                signers.len()
            ),
        ));
    }
    Ok(())
}

/// Append the authority block: the authority signs only when no extra
/// signers are supplied; every extra signer is a read-only signer.
pub(crate) fn push_authority(accounts: &mut Vec<AccountRef>, authority: &Pubkey, signers: &[Pubkey]) {
    accounts.push(AccountRef::new_readonly(*authority, signers.is_empty()));
    accounts.extend(signers.iter().map(|s| AccountRef::new_readonly(*s, true)));
}
