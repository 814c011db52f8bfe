//! Lunes address encoding and validation
//!
//! An address is `version ‖ chain ‖ hash20 ‖ checksum`, where `hash20` is the
//! first 20 bytes of the double hash of the public key and `checksum` is the
//! first 4 bytes of the double hash of everything before it. The chain id is
//! written as its ASCII decimal digit (`'1'` = 0x31 for mainnet), not as a
//! binary integer; encode and validate both rely on that.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::crypto::base58;
use crate::crypto::hash::double_hash;
use crate::crypto::keys::PublicKey;
use crate::error::{Error, Result};

/// Address version byte used by Lunes nodes
pub const ADDRESS_VERSION: u8 = 1;
/// Versions `validate` accepts
pub const ACCEPTED_ADDRESS_VERSIONS: &[u8] = &[ADDRESS_VERSION];
/// Length of the trailing checksum
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;
/// Length of the public key hash
pub const ADDRESS_HASH_LENGTH: usize = 20;
/// Total raw address length
pub const ADDRESS_LENGTH: usize = 1 + 1 + ADDRESS_HASH_LENGTH + ADDRESS_CHECKSUM_LENGTH;

/// Network identifier, a single decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChainId(u8);

impl ChainId {
    /// Lunes mainnet
    pub const MAINNET: Self = Self(1);
    /// Lunes testnet
    pub const TESTNET: Self = Self(0);

    /// Create a chain id; only `0..=9` fit in the one-byte address field
    pub fn new(id: u8) -> Result<Self> {
        if id > 9 {
            return Err(Error::InvalidInput(format!("Chain id must be a single digit, got {}", id)));
        }
        Ok(Self(id))
    }

    /// Numeric chain id
    pub fn id(&self) -> u8 {
        self.0
    }

    /// The byte written into addresses: the id's ASCII digit
    pub fn as_byte(&self) -> u8 {
        b'0' + self.0
    }
}

impl TryFrom<u8> for ChainId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(id)
    }
}

impl From<ChainId> for u8 {
    fn from(chain: ChainId) -> u8 {
        chain.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw address bytes.
///
/// Parsing from base58 only decodes; use [`Address::is_valid`] or
/// [`validate`] to check checksum, version, chain and length.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: Vec<u8>,
}

impl Address {
    /// Compute the address of a public key with the default version byte
    pub fn from_public_key(public_key: &PublicKey, chain: ChainId) -> Self {
        encode(public_key.as_bytes(), chain, ADDRESS_VERSION)
    }

    /// Wrap raw address bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decode base58 text without validating it
    pub fn from_base58(text: &str) -> Result<Self> {
        Ok(Self::from_bytes(base58::decode(text)?))
    }

    /// Get the raw address bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base58 text of the address
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes)
    }

    /// Version byte, if present
    pub fn version(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Whether this address passes all checks for `chain`
    pub fn is_valid(&self, chain: ChainId) -> bool {
        validate_bytes(chain, &self.bytes, ACCEPTED_ADDRESS_VERSIONS)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base58(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base58(&text).map_err(de::Error::custom)
    }
}

/// Build the address for a public key on `chain` with an explicit version byte
pub fn encode(public_key: &[u8], chain: ChainId, version: u8) -> Address {
    let mut raw = Vec::with_capacity(ADDRESS_LENGTH);
    raw.push(version);
    raw.push(chain.as_byte());
    raw.extend_from_slice(&double_hash(public_key)[..ADDRESS_HASH_LENGTH]);

    let checksum = double_hash(&raw);
    raw.extend_from_slice(&checksum[..ADDRESS_CHECKSUM_LENGTH]);

    Address::from_bytes(raw)
}

/// Check a base58 address for `chain` against the default accepted versions.
///
/// Malformed base58 counts as an invalid address; this never errors.
pub fn validate(chain: ChainId, address: &str) -> bool {
    validate_with_versions(chain, address, ACCEPTED_ADDRESS_VERSIONS)
}

/// Like [`validate`], accepting any version byte in `versions`
pub fn validate_with_versions(chain: ChainId, address: &str, versions: &[u8]) -> bool {
    match base58::decode(address) {
        Ok(raw) => validate_bytes(chain, &raw, versions),
        Err(e) => {
            tracing::debug!("Rejecting address: {}", e);
            false
        }
    }
}

fn validate_bytes(chain: ChainId, raw: &[u8], versions: &[u8]) -> bool {
    // Checked first so the slicing below stays in bounds
    if raw.len() != ADDRESS_LENGTH {
        return false;
    }

    let (address_left, checksum) = raw.split_at(raw.len() - ADDRESS_CHECKSUM_LENGTH);
    let expected = double_hash(address_left);

    checksum == &expected[..ADDRESS_CHECKSUM_LENGTH]
        && versions.contains(&raw[0])
        && raw[1] == chain.as_byte()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_key() -> PublicKey {
        PublicKey::from_bytes([3u8; 32])
    }

    #[test]
    fn test_chain_id() {
        assert_eq!(ChainId::MAINNET.as_byte(), b'1');
        assert_eq!(ChainId::TESTNET.as_byte(), b'0');
        assert_eq!(ChainId::new(9).unwrap().as_byte(), b'9');
        assert!(ChainId::new(10).is_err());
    }

    #[test]
    fn test_encode_layout() {
        let address = Address::from_public_key(&public_key(), ChainId::MAINNET);
        let raw = address.as_bytes();

        assert_eq!(raw.len(), ADDRESS_LENGTH);
        assert_eq!(raw[0], ADDRESS_VERSION);
        assert_eq!(raw[1], b'1');
        assert_eq!(&raw[2..22], &double_hash(&[3u8; 32])[..20]);
        assert_eq!(&raw[22..], &double_hash(&raw[..22])[..4]);
    }

    #[test]
    fn test_validate_round_trip() {
        let address = Address::from_public_key(&public_key(), ChainId::TESTNET);
        assert!(address.is_valid(ChainId::TESTNET));
        assert!(validate(ChainId::TESTNET, &address.to_base58()));
    }

    #[test]
    fn test_validate_wrong_chain() {
        let address = Address::from_public_key(&public_key(), ChainId::MAINNET);
        assert!(!validate(ChainId::TESTNET, &address.to_base58()));
    }

    #[test]
    fn test_validate_unaccepted_version() {
        let address = encode(&[3u8; 32], ChainId::MAINNET, 0x35);
        assert!(!validate(ChainId::MAINNET, &address.to_base58()));
        assert!(validate_with_versions(ChainId::MAINNET, &address.to_base58(), &[1, 0x35]));
    }

    #[test]
    fn test_validate_bad_checksum() {
        let address = Address::from_public_key(&public_key(), ChainId::MAINNET);
        for i in ADDRESS_LENGTH - ADDRESS_CHECKSUM_LENGTH..ADDRESS_LENGTH {
            let mut raw = address.as_bytes().to_vec();
            raw[i] ^= 0xFF;
            assert!(!validate(ChainId::MAINNET, &base58::encode(&raw)));
        }
    }

    #[test]
    fn test_validate_wrong_length() {
        let address = Address::from_public_key(&public_key(), ChainId::MAINNET);
        let mut raw = address.as_bytes().to_vec();
        raw.push(0);
        assert!(!validate(ChainId::MAINNET, &base58::encode(&raw)));
        assert!(!validate(ChainId::MAINNET, &base58::encode(&raw[..3])));
        assert!(!validate(ChainId::MAINNET, ""));
    }

    #[test]
    fn test_validate_malformed_base58() {
        assert!(!validate(ChainId::MAINNET, "0OIl"));
        assert!(!validate(ChainId::MAINNET, "not an address!"));
    }

    #[test]
    fn test_serde_as_base58() {
        let address = Address::from_public_key(&public_key(), ChainId::MAINNET);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address.to_base58()));

        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, address);
        assert!(serde_json::from_str::<Address>("\"0OIl\"").is_err());
    }
}
