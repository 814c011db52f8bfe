//! Seed and key pair derivation

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::base58;
use crate::crypto::hash::seed_hash;
use crate::error::{Error, Result};
use super::curve25519::{Curve25519, SignatureScheme};

/// Length of private and public keys in bytes
pub const KEY_LENGTH: usize = 32;

/// A curve25519 private key
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; KEY_LENGTH],
}

impl PrivateKey {
    /// Wrap raw private key bytes
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse a base58 private key
    pub fn from_base58(text: &str) -> Result<Self> {
        let bytes = Zeroizing::new(base58::decode_array::<KEY_LENGTH>(text)?);
        Ok(Self::from_bytes(*bytes))
    }

    /// Get the raw private key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    /// Base58 text of the key
    pub fn to_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(base58::encode(&self.bytes))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A curve25519 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; KEY_LENGTH],
}

impl PublicKey {
    /// Wrap raw public key bytes
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse a base58 public key
    pub fn from_base58(text: &str) -> Result<Self> {
        Ok(Self::from_bytes(base58::decode_array::<KEY_LENGTH>(text)?))
    }

    /// Get the raw public key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    /// Base58 text of the key
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_base58())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base58(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base58(&text).map_err(de::Error::custom)
    }
}

/// A private key together with its public key
#[derive(Debug, Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Pair a private key with a public key, checking that they belong together
    pub fn new(private_key: PrivateKey, public_key: PublicKey) -> Result<Self> {
        if derive_public_key(&private_key) != public_key {
            return Err(Error::KeyDerivation("Public key does not match private key".to_string()));
        }
        Ok(Self { private_key, public_key })
    }

    /// Complete a key pair from its private half
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = derive_public_key(&private_key);
        Self { private_key, public_key }
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// Hash a nonce and seed phrase into the 32-byte private seed.
///
/// The nonce is prepended as 4 big-endian bytes, so one phrase yields a
/// distinct account per nonce.
pub fn derive_seed(nonce: u32, phrase: &str) -> Zeroizing<[u8; 32]> {
    let mut raw = Zeroizing::new(Vec::with_capacity(4 + phrase.len()));
    raw.extend_from_slice(&nonce.to_be_bytes());
    raw.extend_from_slice(phrase.as_bytes());
    Zeroizing::new(seed_hash(&raw))
}

/// Turn a private seed into a clamped curve25519 private key
pub fn derive_private_key(seed: &[u8; 32]) -> PrivateKey {
    PrivateKey::from_bytes(Curve25519.private_key(seed))
}

/// Compute the public key for a private key
pub fn derive_public_key(private_key: &PrivateKey) -> PublicKey {
    PublicKey::from_bytes(Curve25519.public_key(private_key.as_bytes()))
}

/// Derive the key pair for a nonce and seed phrase
pub fn derive_key_pair(nonce: u32, phrase: &str) -> KeyPair {
    let seed = derive_seed(nonce, phrase);
    KeyPair::from_private_key(derive_private_key(&seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "scrub guard swim catch range upon dawn ensure segment alpha sentence spend effort bar benefit";

    #[test]
    fn test_derive_seed_prefixes_nonce() {
        let mut raw = vec![0, 0, 0, 5];
        raw.extend_from_slice(PHRASE.as_bytes());
        assert_eq!(*derive_seed(5, PHRASE), seed_hash(&raw));
        assert_ne!(*derive_seed(0, PHRASE), *derive_seed(1, PHRASE));
    }

    #[test]
    fn test_key_pair_is_deterministic() {
        let a = derive_key_pair(0, PHRASE);
        let b = derive_key_pair(0, PHRASE);
        assert_eq!(a.private_key(), b.private_key());
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_key_pair_mismatch() {
        let a = derive_key_pair(0, PHRASE);
        let b = derive_key_pair(1, PHRASE);
        assert!(KeyPair::new(a.private_key().clone(), *a.public_key()).is_ok());
        assert!(matches!(
            KeyPair::new(a.private_key().clone(), *b.public_key()),
            Err(Error::KeyDerivation(_))
        ));
    }

    #[test]
    fn test_base58_round_trip() {
        let pair = derive_key_pair(0, PHRASE);
        let private = PrivateKey::from_base58(&pair.private_key().to_base58()).unwrap();
        let public: PublicKey = pair.public_key().to_base58().parse().unwrap();
        assert_eq!(&private, pair.private_key());
        assert_eq!(&public, pair.public_key());
        assert!(PublicKey::from_base58("3P").is_err());
    }

    #[test]
    fn test_imported_unclamped_key_matches_x25519() {
        use curve25519_dalek::montgomery::MontgomeryPoint;

        let raw = [0xFFu8; KEY_LENGTH];
        let imported = KeyPair::from_private_key(PrivateKey::from_bytes(raw));
        assert_eq!(imported.public_key().as_bytes(), &MontgomeryPoint::mul_base_clamped(raw).to_bytes());
        assert_eq!(imported.public_key(), &derive_public_key(&derive_private_key(&raw)));
    }

    #[test]
    fn test_debug_hides_private_key() {
        let pair = derive_key_pair(0, PHRASE);
        let debug = format!("{:?}", pair);
        assert!(!debug.contains(pair.private_key().to_base58().as_str()));
    }
}
