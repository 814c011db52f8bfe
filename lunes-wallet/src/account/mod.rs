//! Account management functionality
//!
//! This module computes and validates Lunes addresses and ties a seed phrase,
//! key pair and address together into an account.

pub mod address;
mod wallet;

pub use address::{validate, Address, ChainId, ADDRESS_LENGTH, ADDRESS_VERSION};
pub use wallet::*;
