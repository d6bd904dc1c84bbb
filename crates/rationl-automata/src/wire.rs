//! Binary format for compiled DFAs.
//!
//! Layout:
//! - magic `RTLD` (4 bytes)
//! - format version, `u16` little endian
//! - CRC-32 of the payload, `u32` little endian
//! - postcard-encoded payload
//!
//! Decoding re-validates the table structure: every target is in range and
//! the dead state absorbs. Nothing ties a decoded table to a pattern, so its
//! matches need not fall on UTF-8 boundaries.

use rationl_core::ByteClasses;
use serde::{Deserialize, Serialize};

use crate::invariants;
use crate::{DEAD, Dfa, StateFlags, StateId};

const MAGIC: [u8; 4] = *b"RTLD";
const VERSION: u16 = 1;
const HEADER_LEN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is shorter than the header")]
    Truncated,

    #[error("not a rationl automaton (bad magic)")]
    BadMagic,

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),

    #[error("checksum mismatch: expected {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("malformed payload: {0}")]
    Payload(#[from] postcard::Error),

    #[error("invalid automaton: {0}")]
    Invalid(&'static str),
}

#[derive(Serialize, Deserialize)]
struct DfaRepr {
    classes: Vec<u8>,
    table: Vec<StateId>,
    flags: Vec<StateFlags>,
    start_at_input: StateId,
    start_in_text: StateId,
}

impl Dfa {
    pub fn to_bytes(&self) -> Vec<u8> {
        let repr = DfaRepr {
            classes: self.classes.as_slice().to_vec(),
            table: self.table.clone(),
            flags: self.flags.clone(),
            start_at_input: self.start_at_input,
            start_in_text: self.start_in_text,
        };
        let payload = invariants::encode_payload(&repr);

        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        out.extend_from_slice(&payload);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_LEN {
            return Err(DecodeError::Truncated);
        }
        let (header, payload) = bytes.split_at(HEADER_LEN);
        if header[..4] != MAGIC {
            return Err(DecodeError::BadMagic);
        }
        let version = u16::from_le_bytes([header[4], header[5]]);
        if version != VERSION {
            return Err(DecodeError::UnsupportedVersion(version));
        }
        let expected = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
        let actual = crc32fast::hash(payload);
        if expected != actual {
            return Err(DecodeError::ChecksumMismatch { expected, actual });
        }

        let repr: DfaRepr = postcard::from_bytes(payload)?;
        repr.validate()
    }
}

impl DfaRepr {
    fn validate(self) -> Result<Dfa, DecodeError> {
        let classes = ByteClasses::from_slice(&self.classes)
            .ok_or(DecodeError::Invalid("byte class table is malformed"))?;
        let stride = classes.alphabet_len();
        let count = self.flags.len();

        if count == 0 {
            return Err(DecodeError::Invalid("missing dead state"));
        }
        if self.table.len() != count * stride {
            return Err(DecodeError::Invalid("transition table size mismatch"));
        }
        let in_bounds = |id: StateId| id.as_usize() < count;
        if !self.table.iter().copied().all(in_bounds) {
            return Err(DecodeError::Invalid("transition target out of range"));
        }
        if !in_bounds(self.start_at_input) || !in_bounds(self.start_in_text) {
            return Err(DecodeError::Invalid("start state out of range"));
        }
        if self.flags[0] != StateFlags::REJECT || self.table[..stride].iter().any(|&t| t != DEAD) {
            return Err(DecodeError::Invalid("dead state is not absorbing"));
        }

        Ok(Dfa {
            classes,
            stride,
            table: self.table,
            flags: self.flags,
            start_at_input: self.start_at_input,
            start_in_text: self.start_in_text,
        })
    }
}
