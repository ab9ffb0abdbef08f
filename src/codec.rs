//! Little-endian primitive codec for instruction payloads.
//!
//! All values are written back to back with no alignment padding. Strings
//! carry a u64 length prefix followed by their UTF-8 bytes. This layer knows
//! nothing about instruction semantics; the reader only carries the variant
//! name so errors can say where they happened.

use crate::error::CodecError;
use crate::pubkey::Pubkey;

/// Append-only payload writer. Writing never fails.
#[derive(Debug, Default, Clone)]
pub struct InstructionWriter {
    buf: Vec<u8>,
}

impl InstructionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(value as u8)
    }

    pub fn write_fixed_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_pubkey(&mut self, pubkey: &Pubkey) -> &mut Self {
        self.write_fixed_bytes(pubkey.as_ref())
    }

    /// Presence flag followed by 32 key bytes, zeroed when absent.
    pub fn write_optional_pubkey(&mut self, pubkey: Option<&Pubkey>) -> &mut Self {
        self.write_bool(pubkey.is_some());
        match pubkey {
            Some(pubkey) => self.write_pubkey(pubkey),
            None => self.write_fixed_bytes(&[0u8; 32]),
        }
    }

    /// u64 length prefix, then the UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        self.write_u64(value.len() as u64);
        self.write_fixed_bytes(value.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over a payload. Each read consumes exactly the bytes it declares.
#[derive(Debug, Clone)]
pub struct InstructionReader<'a> {
    data: &'a [u8],
    offset: usize,
    variant: &'static str,
}

impl<'a> InstructionReader<'a> {
    pub fn new(data: &'a [u8], variant: &'static str) -> Self {
        Self {
            data,
            offset: 0,
            variant,
        }
    }

    /// Re-labels subsequent errors once the tag has selected a variant.
    pub fn set_variant(&mut self, variant: &'static str) {
        self.variant = variant;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::TruncatedData {
                variant: self.variant,
                field,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CodecError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N, field)?);
        Ok(array)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>(field)?[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, CodecError> {
        self.take_array(field).map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, CodecError> {
        self.take_array(field).map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, CodecError> {
        self.take_array(field).map(u64::from_le_bytes)
    }

    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, CodecError> {
        match self.read_u8(field)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidData {
                variant: self.variant,
                field,
                reason: format!("expected boolean 0 or 1, got {}", other),
            }),
        }
    }

    pub fn read_fixed_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        self.take(len, field)
    }

    pub fn read_pubkey(&mut self, field: &'static str) -> Result<Pubkey, CodecError> {
        self.take_array::<32>(field).map(Pubkey::from)
    }

    /// Reads a presence flag and its 32 key bytes.
    ///
    /// With the flag cleared the key bytes may be missing entirely, which is
    /// how the token program itself packs an absent key.
    pub fn read_optional_pubkey(&mut self, field: &'static str) -> Result<Option<Pubkey>, CodecError> {
        if self.read_bool(field)? {
            return self.read_pubkey(field).map(Some);
        }
        if self.remaining() >= 32 {
            self.take(32, field)?;
        }
        Ok(None)
    }

    pub fn read_string(&mut self, field: &'static str) -> Result<String, CodecError> {
        let declared = self.read_u64(field)?;
        let len = usize::try_from(declared).unwrap_or(usize::MAX);
        let bytes = self.take(len, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::InvalidData {
            variant: self.variant,
            field,
            reason: format!("invalid UTF-8: {}", e),
        })
    }
}
