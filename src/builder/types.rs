//! Builder input types.

use crate::instructions::{
    AssociatedTokenInstructionParams, ProgramFamily, SystemInstructionParams,
    TokenInstructionParams,
};
use serde::{Deserialize, Serialize};

/// Parameters for any supported instruction, tagged by program.
///
/// ```json
/// {
///   "program": "token",
///   "params": { "type": "transfer", "source": "...", "destination": "...",
///               "authority": "...", "amount": 1000 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "program", content = "params", rename_all = "camelCase")]
pub enum InstructionParams {
    System(SystemInstructionParams),
    Token(TokenInstructionParams),
    AssociatedToken(AssociatedTokenInstructionParams),
}

impl InstructionParams {
    pub fn family(&self) -> ProgramFamily {
        match self {
            Self::System(_) => ProgramFamily::System,
            Self::Token(_) => ProgramFamily::Token,
            Self::AssociatedToken(_) => ProgramFamily::AssociatedToken,
        }
    }
}

impl From<SystemInstructionParams> for InstructionParams {
    fn from(params: SystemInstructionParams) -> Self {
        Self::System(params)
    }
}

impl From<TokenInstructionParams> for InstructionParams {
    fn from(params: TokenInstructionParams) -> Self {
        Self::Token(params)
    }
}

impl From<AssociatedTokenInstructionParams> for InstructionParams {
    fn from(params: AssociatedTokenInstructionParams) -> Self {
        Self::AssociatedToken(params)
    }
}
