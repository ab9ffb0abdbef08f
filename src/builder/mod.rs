//! Instruction building.
//!
//! Turns a tagged parameter object (the form JavaScript callers send) into a
//! ready-to-sign instruction, and provides the small helpers needed to
//! assemble several instructions into one message.

mod build;
mod types;

pub use build::{encode, unique_signers, with_nonce_advance};
pub use types::InstructionParams;
