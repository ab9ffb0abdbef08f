//! Addresses the codec knows about, exposed to JavaScript.
//!
//! Callers use these to build account lists or to recognize which
//! instructions `ParserNamespace` will decode.

use wasm_bindgen::prelude::*;

use super::to_js_value;
use crate::instructions::{
    associated_token_address, ProgramFamily, ATA_PROGRAM_ID, SYSTEM_PROGRAM_ID,
    SYSVAR_RECENT_BLOCKHASHES, SYSVAR_RENT, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use crate::pubkey::{Pubkey, PubkeyExt};

#[wasm_bindgen]
pub fn system_program_id() -> String {
    SYSTEM_PROGRAM_ID.to_string()
}

/// Classic SPL Token program; the encoder always targets this one.
#[wasm_bindgen]
pub fn token_program_id() -> String {
    TOKEN_PROGRAM_ID.to_string()
}

/// Decoded with the SPL Token layouts.
#[wasm_bindgen]
pub fn token_2022_program_id() -> String {
    TOKEN_2022_PROGRAM_ID.to_string()
}

#[wasm_bindgen]
pub fn ata_program_id() -> String {
    ATA_PROGRAM_ID.to_string()
}

/// Both sysvars the encoder inserts into account lists, keyed by role.
#[wasm_bindgen]
pub fn sysvar_ids() -> Result<JsValue, JsValue> {
    let sysvars: std::collections::BTreeMap<&str, String> = [
        ("rent", SYSVAR_RENT.to_string()),
        ("recentBlockhashes", SYSVAR_RECENT_BLOCKHASHES.to_string()),
    ]
    .into_iter()
    .collect();
    to_js_value(&sysvars)
}

/// The parsed-output label for a program id, or `undefined` when the codec
/// has no decoder for it.
#[wasm_bindgen]
pub fn program_label(program_id: &str) -> Result<Option<String>, JsValue> {
    let program_id = Pubkey::from_base58(program_id)?;
    Ok(ProgramFamily::from_program_id(&program_id).map(|f| f.program_name().to_string()))
}

/// Derive the associated token account for a wallet and mint.
///
/// @param wallet_address - Owner wallet address (base58)
/// @param mint_address - Token mint address (base58)
/// @param token_program_id - Owning token program (base58)
/// @returns The derived ATA address (base58)
#[wasm_bindgen]
pub fn get_associated_token_address(
    wallet_address: &str,
    mint_address: &str,
    token_program_id: &str,
) -> Result<String, JsValue> {
    let wallet = Pubkey::from_base58(wallet_address)?;
    let mint = Pubkey::from_base58(mint_address)?;
    let token_program = Pubkey::from_base58(token_program_id)?;
    Ok(associated_token_address(&wallet, &mint, &token_program).to_string())
}
