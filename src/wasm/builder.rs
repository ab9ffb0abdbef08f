//! WASM binding for instruction building.

use super::to_js_value;
use crate::builder;
use crate::pubkey::{Pubkey, PubkeyExt};
use wasm_bindgen::prelude::*;

/// Namespace for instruction building operations.
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Encode one instruction from its parameters.
    ///
    /// ```json
    /// {
    ///   "program": "system",
    ///   "params": { "type": "transfer", "from": "...", "to": "...", "lamports": 1000000 }
    /// }
    /// ```
    ///
    /// `program` is one of `system`, `token`, `associatedToken`. Token
    /// instructions with an authority accept an optional `signers` list for
    /// multisig authorities.
    ///
    /// @param params - The instruction parameters as a JSON object
    /// @returns `{ programId, accounts: [{ pubkey, isSigner, isWritable }], data }`
    #[wasm_bindgen]
    pub fn encode_instruction(params: JsValue) -> Result<JsValue, JsValue> {
        let params: builder::InstructionParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse instruction params: {}", e)))?;

        let instruction = builder::encode(&params)?;
        to_js_value(&instruction)
    }

    /// Encode a durable-nonce instruction list: the nonce advance followed by
    /// each of `params`.
    ///
    /// @param nonce - Nonce account address (base58)
    /// @param authority - Nonce authority address (base58)
    /// @param params - Array of instruction parameter objects
    #[wasm_bindgen]
    pub fn encode_with_nonce(
        nonce: &str,
        authority: &str,
        params: JsValue,
    ) -> Result<JsValue, JsValue> {
        let nonce = Pubkey::from_base58(nonce)?;
        let authority = Pubkey::from_base58(authority)?;
        let params: Vec<builder::InstructionParams> = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse instruction params: {}", e)))?;

        let instructions = params
            .iter()
            .map(builder::encode)
            .collect::<Result<Vec<_>, _>>()?;
        let instructions = builder::with_nonce_advance(nonce, authority, instructions)?;
        to_js_value(&instructions)
    }
}
