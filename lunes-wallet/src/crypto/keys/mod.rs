//! Key derivation and management
//!
//! This module turns a seed phrase into curve25519 key material and exposes
//! the signing capability used by transfer signing.

pub mod curve25519;
mod derivation;

pub use curve25519::{Curve25519, SignatureScheme, SIGNATURE_LENGTH};
pub use derivation::*;
