//! wasm-solana-codec: System Program and SPL Token instruction codec with WASM bindings.
//!
//! Encodes typed instruction parameters into the exact payload bytes and
//! ordered account lists the on-chain programs expect, and decodes raw
//! instructions back into labeled, human-readable form.
//!
//! # Architecture
//!
//! 1. **Primitives** (`codec`, `pubkey`) - Little-endian reader/writer and base58 key handling
//! 2. **Instruction families** (`instructions`) - Typed params with `encode`/`decode`/`info`
//!    for the System, SPL Token and Associated Token Account programs
//! 3. **Entry points** (`builder`, `parser`) - Program-tagged encoding and program-id dispatch
//! 4. **WASM bindings** (`wasm/`) - Thin wrappers that expose the entry points to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_solana_codec::{parse_instruction, Pubkey, SystemInstructionParams};
//!
//! let transfer = SystemInstructionParams::Transfer {
//!     from: Pubkey::new_from_array([1; 32]),
//!     to: Pubkey::new_from_array([2; 32]),
//!     lamports: 1_000_000,
//! };
//! let ix = transfer.encode().unwrap();
//!
//! let parsed = parse_instruction(&ix.program_id, &ix.account_keys(), &ix.data).unwrap();
//! assert_eq!(parsed.instruction_type(), "transfer");
//! ```

pub mod builder;
pub mod codec;
mod error;
pub mod instructions;
mod parser;
pub mod pubkey;
pub mod wasm;

// Re-export core types at crate root
pub use error::CodecError;
pub use instructions::{
    AccountRef, AssociatedTokenInstructionParams, ProgramFamily, RawInstruction,
    SystemInstructionParams, TokenInstructionParams, UiTokenAmount,
};
pub use parser::{
    decode, parse_compiled_instruction, parse_instruction, InstructionInfo, ParsedInstruction,
};
pub use pubkey::{Pubkey, PubkeyExt};

// Re-export WASM types
pub use wasm::{BuilderNamespace, ParserNamespace};
