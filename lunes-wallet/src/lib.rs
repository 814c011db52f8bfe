//! Lunes Wallet Core - client-side cryptography for the Lunes blockchain
//!
//! This library derives key material from a seed phrase, computes checksummed
//! Lunes addresses, and serializes and signs transfer transactions so they can
//! be broadcast to a node.

pub mod error;
pub mod crypto;
pub mod account;
pub mod transaction;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use account::{Account, Address, ChainId};
pub use crypto::keys::{KeyPair, PrivateKey, PublicKey};
pub use transaction::{SignedTransfer, TransferTransaction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
