//! Base58 text encoding for keys, addresses and signatures
//!
//! Uses the Bitcoin alphabet, which excludes 0, O, I and l.

use crate::error::{Error, Result};

/// Encode bytes as base58 text
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode base58 text, failing on characters outside the alphabet
pub fn decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| Error::Decode(format!("Invalid base58 '{}': {}", text, e)))
}

/// Decode base58 text that must hold exactly `N` bytes
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    let bytes = decode(text)?;
    bytes.as_slice().try_into().map_err(|_| {
        Error::Decode(format!("Expected {} bytes, got {}", N, bytes.len()))
    })
}
