//! Hash chain used by seed derivation and address construction
//!
//! Lunes composes three standard digests: BLAKE2b truncated to a 32-byte
//! output, Keccak-256 with the original Keccak padding (not NIST SHA3-256),
//! and SHA-256.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b with a 32-byte digest
pub fn blake2b32(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Keccak-256 as used by Ethereum and Waves-family chains
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// `keccak256(blake2b32(data))`, the address-construction hash.
pub fn double_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b32(data))
}

/// `sha256(double_hash(data))`, used to turn a nonce and phrase into a seed.
pub fn seed_hash(data: &[u8]) -> [u8; 32] {
    sha256(&double_hash(data))
}
