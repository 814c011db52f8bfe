//! Cryptographic primitives and operations
//!
//! This module provides the hash chain used for seeds and addresses, base58
//! text encoding, seed phrase generation, and curve25519 key handling.

pub mod base58;
pub mod hash;
pub mod keccak;
pub mod mnemonic;
pub mod keys;

pub use hash::{blake2b32, double_hash, keccak256, seed_hash, sha256};
pub use mnemonic::*;
pub use keys::*;
