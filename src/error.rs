use wasm_bindgen::prelude::*;

/// Errors produced while encoding or decoding instructions.
///
/// An unrecognized instruction tag is deliberately not represented here:
/// decoders report it as an absent result so newer on-chain variants do not
/// break unrelated processing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Caller-supplied parameters violate a variant's structural precondition.
    #[error("Invalid parameter for {variant}: {reason}")]
    InvalidParameter {
        variant: &'static str,
        reason: String,
    },

    /// The payload ended before a fixed-layout field could be read.
    #[error(
        "Truncated data in {variant}: field `{field}` needs {needed} bytes, {remaining} remaining"
    )]
    TruncatedData {
        variant: &'static str,
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// Fewer accounts than the variant's fixed prefix requires.
    #[error("Malformed account list for {variant}: expected at least {expected} accounts, got {actual}")]
    MalformedAccountList {
        variant: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A field was present but its bytes are not a valid value.
    #[error("Invalid data in {variant} field `{field}`: {reason}")]
    InvalidData {
        variant: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid public key: {0}")]
    InvalidPubkey(String),
}

impl CodecError {
    pub(crate) fn invalid_parameter(variant: &'static str, reason: impl Into<String>) -> Self {
        CodecError::InvalidParameter {
            variant,
            reason: reason.into(),
        }
    }
}

// Converts to a JS Error with stack trace
impl From<CodecError> for JsValue {
    fn from(err: CodecError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
