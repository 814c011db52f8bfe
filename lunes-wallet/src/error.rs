//! Error types for the lunes-wallet library

use thiserror::Error;

/// Custom error type for lunes-wallet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the HTTP client, passed through as-is
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Result type for lunes-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
