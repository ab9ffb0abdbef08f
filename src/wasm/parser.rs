//! WASM binding for instruction parsing.

use super::to_js_value;
use crate::parser;
use crate::pubkey::{Pubkey, PubkeyExt};
use wasm_bindgen::prelude::*;

fn parse_keys(keys: &[String]) -> Result<Vec<Pubkey>, JsValue> {
    keys.iter()
        .map(|key| Pubkey::from_base58(key).map_err(JsValue::from))
        .collect()
}

/// Namespace for instruction parsing operations.
#[wasm_bindgen]
pub struct ParserNamespace;

#[wasm_bindgen]
impl ParserNamespace {
    /// Parse one instruction.
    ///
    /// Returns `{ program?, programId, accounts, data?, parsed? }`. `parsed`
    /// is `{ type, info }` for recognized instructions; otherwise `data`
    /// holds the raw bytes as base58.
    ///
    /// @param program_id - Program address (base58)
    /// @param accounts - Account addresses in instruction order (base58)
    /// @param data - Raw instruction data
    #[wasm_bindgen]
    pub fn parse_instruction(
        program_id: &str,
        accounts: Vec<String>,
        data: &[u8],
    ) -> Result<JsValue, JsValue> {
        let program_id = Pubkey::from_base58(program_id)?;
        let accounts = parse_keys(&accounts)?;
        let parsed = parser::parse_instruction(&program_id, &accounts, data)?;
        to_js_value(&parsed)
    }

    /// Parse an instruction compiled against a message's account key table.
    ///
    /// @param account_keys - The message's account keys (base58)
    /// @param program_id_index - Index of the program id in `account_keys`
    /// @param account_indexes - Indexes of the instruction's accounts
    /// @param data - Raw instruction data
    #[wasm_bindgen]
    pub fn parse_compiled_instruction(
        account_keys: Vec<String>,
        program_id_index: u8,
        account_indexes: &[u8],
        data: &[u8],
    ) -> Result<JsValue, JsValue> {
        let account_keys = parse_keys(&account_keys)?;
        let parsed = parser::parse_compiled_instruction(
            &account_keys,
            program_id_index,
            account_indexes,
            data,
        )?;
        to_js_value(&parsed)
    }
}
