//! Instruction parser.
//!
//! Routes an instruction to its program family by program id and decodes it
//! into the RPC `jsonParsed` shape: a program label, the resolved accounts,
//! and a `{ type, info }` object. Instructions this crate cannot interpret
//! keep their raw data as base58 and carry no `parsed` object.

use crate::error::CodecError;
use crate::instructions::{
    AssociatedTokenInstructionParams, ProgramFamily, SystemInstructionParams,
    TokenInstructionParams,
};
use crate::pubkey::Pubkey;
use serde::Serialize;
use serde_json::{Map, Value};

/// The decoded `{ type, info }` part of a parsed instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionInfo {
    #[serde(rename = "type")]
    pub instruction_type: String,
    pub info: Map<String, Value>,
}

/// One instruction as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInstruction {
    /// Program label, absent for programs this crate does not know.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub program_id: String,
    /// Account addresses in instruction order.
    pub accounts: Vec<String>,
    /// Base58 instruction data, kept only when the instruction was not decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<InstructionInfo>,
}

impl ParsedInstruction {
    /// The decoded instruction type, or `""` when undecoded.
    pub fn instruction_type(&self) -> &str {
        self.parsed
            .as_ref()
            .map_or("", |parsed| parsed.instruction_type.as_str())
    }
}

/// Decode `data` for a known program family.
///
/// Returns `Ok(None)` when the tag has no registered variant.
pub fn decode(
    family: ProgramFamily,
    data: &[u8],
    accounts: &[Pubkey],
) -> Result<Option<InstructionInfo>, CodecError> {
    let parsed = match family {
        ProgramFamily::System => SystemInstructionParams::decode(data, accounts)?.map(|params| {
            InstructionInfo {
                instruction_type: params.instruction_type().as_str().to_string(),
                info: params.info(accounts),
            }
        }),
        ProgramFamily::Token => TokenInstructionParams::decode(data, accounts)?.map(|params| {
            InstructionInfo {
                instruction_type: params.instruction_type().as_str().to_string(),
                info: params.info(accounts),
            }
        }),
        ProgramFamily::AssociatedToken => AssociatedTokenInstructionParams::decode(data, accounts)?
            .map(|params| InstructionInfo {
                instruction_type: params.name().to_string(),
                info: params.info(accounts),
            }),
    };
    Ok(parsed)
}

/// Parse one instruction given its program id, account keys and data.
pub fn parse_instruction(
    program_id: &Pubkey,
    accounts: &[Pubkey],
    data: &[u8],
) -> Result<ParsedInstruction, CodecError> {
    let family = ProgramFamily::from_program_id(program_id);
    let parsed = match family {
        Some(family) => {
            log::debug!("decoding {} instruction ({} bytes)", family, data.len());
            decode(family, data, accounts)?
        }
        None => {
            log::debug!("no decoder for program {}", program_id);
            None
        }
    };

    Ok(ParsedInstruction {
        program: family.map(|f| f.program_name().to_string()),
        program_id: program_id.to_string(),
        accounts: accounts.iter().map(ToString::to_string).collect(),
        data: parsed
            .is_none()
            .then(|| bs58::encode(data).into_string()),
        parsed,
    })
}

/// Parse an instruction whose program and accounts are indexes into a
/// message's account key table.
pub fn parse_compiled_instruction(
    account_keys: &[Pubkey],
    program_id_index: u8,
    account_indexes: &[u8],
    data: &[u8],
) -> Result<ParsedInstruction, CodecError> {
    let lookup = |index: u8| {
        account_keys
            .get(usize::from(index))
            .copied()
            .ok_or(CodecError::MalformedAccountList {
                variant: "compiledInstruction",
                expected: usize::from(index) + 1,
                actual: account_keys.len(),
            })
    };

    let program_id = lookup(program_id_index)?;
    let accounts = account_indexes
        .iter()
        .map(|&index| lookup(index))
        .collect::<Result<Vec<_>, _>>()?;

    parse_instruction(&program_id, &accounts, data)
}
