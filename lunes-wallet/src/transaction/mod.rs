//! Transaction functionality
//!
//! This module builds transfer transactions, encodes them into the byte
//! layout nodes verify signatures against, signs them, and broadcasts them.

pub mod types;
pub mod transfer;
mod signer;
pub mod provider;

pub use types::*;
pub use transfer::serialize;
pub use signer::*;
pub use provider::{NodeConfig, NodeProvider};
