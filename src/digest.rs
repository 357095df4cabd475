//! The 256-bit content hash that names every blob in the object store.

use std::fmt::{self, Debug, Display, Formatter};

use hex_fmt::HexFmt;
use serde::{Deserialize, Serialize};

/// A 256-bit digest identifying a stored blob.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Digest([u8; Digest::LENGTH]);

impl Digest {
    /// Length of a `Digest` in bytes.
    pub const LENGTH: usize = 32;

    /// The all-zero digest, used to mark an empty trie child.
    pub const ZERO: Digest = Digest([0u8; Digest::LENGTH]);

    pub fn new(bytes: [u8; Digest::LENGTH]) -> Self {
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Digest::LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; Digest::LENGTH]
    }

    /// Parses a digest from a 64-character hex string. Case-insensitive.
    pub fn from_hex<T: AsRef<[u8]>>(hex_input: T) -> Result<Self, DigestParseError> {
        let input = hex_input.as_ref();
        if input.len() != Digest::LENGTH * 2 {
            return Err(DigestParseError::WrongLength(input.len()));
        }
        let mut inner = [0u8; Digest::LENGTH];
        hex::decode_to_slice(input, &mut inner).map_err(DigestParseError::BadHex)?;
        Ok(Digest(inner))
    }

    /// Lowercase hex rendering, the form used in listings and symlink targets.
    pub fn to_hex_lower(&self) -> String {
        hex::encode(self.0)
    }

    /// Upper-case hex rendering, the form used for 256-bit scalar field values.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Returns the nibble (half-byte) at `depth` within this digest, used to select
    /// a branch while walking a 16-ary trie. Nibble 0 is the high nibble of byte 0.
    pub fn nibble_at(&self, depth: usize) -> u8 {
        let byte = self.0[depth / 2];
        if depth % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum DigestParseError {
    #[error("expected {} hex characters, found {0}", Digest::LENGTH * 2)]
    WrongLength(usize),
    #[error("invalid hex: {0}")]
    BadHex(hex::FromHexError),
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Debug for Digest {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", HexFmt(&self.0))
    }
}

impl Display for Digest {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_hex_lower())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_hex() {
        let bytes = [0x42u8; 32];
        let digest = Digest::new(bytes);
        let hex = digest.to_hex_lower();
        assert_eq!(hex.len(), 64);
        assert_eq!(Digest::from_hex(&hex).unwrap(), digest);
    }

    #[test]
    fn upper_hex_is_uppercase() {
        let digest = Digest::new([0xabu8; 32]);
        assert_eq!(digest.to_hex_upper(), digest.to_hex_lower().to_uppercase());
    }

    #[test]
    fn rejects_short_hex() {
        assert!(matches!(
            Digest::from_hex("DEADBEEF"),
            Err(DigestParseError::WrongLength(8))
        ));
    }

    #[test]
    fn nibble_selection_matches_shamap_convention() {
        // byte 0 = 0xAB -> nibble 0 is 0xA, nibble 1 is 0xB
        let mut bytes = [0u8; 32];
        bytes[0] = 0xAB;
        let digest = Digest::new(bytes);
        assert_eq!(digest.nibble_at(0), 0xA);
        assert_eq!(digest.nibble_at(1), 0xB);
    }
}
