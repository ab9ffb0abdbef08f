mod builder;
mod constants;
mod parser;

pub use builder::BuilderNamespace;
pub use parser::ParserNamespace;

// Re-export constants functions
pub use constants::*;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Convert to a plain JS object. u64 values become BigInt so large amounts
/// survive the crossing.
pub(crate) fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible()
        .serialize_large_number_types_as_bigints(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::instructions::UiTokenAmount;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_amount_becomes_object() {
        let value = to_js_value(&UiTokenAmount::new(1_500_000, 6)).unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_program_id_getters() {
        assert_eq!(system_program_id(), "11111111111111111111111111111111");
        assert_eq!(token_program_id(), "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
        assert_eq!(
            program_label(&token_2022_program_id()).unwrap().as_deref(),
            Some("spl-token")
        );
        assert_eq!(program_label(&sysvar_rent_text()).unwrap(), None);
    }

    fn sysvar_rent_text() -> String {
        crate::instructions::SYSVAR_RENT.to_string()
    }
}
