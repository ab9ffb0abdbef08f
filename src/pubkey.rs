//! Solana public key (address) handling.
//!
//! Wraps `solana_pubkey::Pubkey`, the account identity used everywhere in the
//! codec, and provides its base58 text conversions and serde adapters.

use crate::error::CodecError;

pub use solana_pubkey::Pubkey;

/// Extension trait for Pubkey to add codec error handling.
pub trait PubkeyExt {
    fn from_base58(address: &str) -> Result<Pubkey, CodecError>;
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, CodecError>;
}

impl PubkeyExt for Pubkey {
    fn from_base58(address: &str) -> Result<Pubkey, CodecError> {
        address
            .parse::<Pubkey>()
            .map_err(|e| CodecError::InvalidPubkey(format!("Invalid base58 {}: {}", address, e)))
    }

    /// Exactly 32 bytes, or `InvalidPubkey`.
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, CodecError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            CodecError::InvalidPubkey(format!(
                "expected 32 key bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Pubkey::from(array))
    }
}

/// Serde adapter: a `Pubkey` as its base58 string.
pub mod serde_base58 {
    use super::{Pubkey, PubkeyExt};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(pubkey)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let address = String::deserialize(deserializer)?;
        Pubkey::from_base58(&address).map_err(de::Error::custom)
    }
}

/// Serde adapter: an optional `Pubkey` as a base58 string or null.
pub mod serde_base58_option {
    use super::{Pubkey, PubkeyExt};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        pubkey: &Option<Pubkey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match pubkey {
            Some(pubkey) => serializer.serialize_some(&pubkey.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Pubkey>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|address| Pubkey::from_base58(&address).map_err(de::Error::custom))
            .transpose()
    }
}

/// Serde adapter: a list of `Pubkey`s as base58 strings.
pub mod serde_base58_vec {
    use super::{Pubkey, PubkeyExt};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pubkeys: &[Pubkey], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(pubkeys.iter().map(|p| p.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Pubkey>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|address| Pubkey::from_base58(address).map_err(de::Error::custom))
            .collect()
    }
}
