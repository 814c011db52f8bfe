//! Account implementation

use std::fmt;

use zeroize::Zeroizing;

use crate::crypto::keys::{derive_key_pair, KeyPair, PrivateKey, PublicKey};
use crate::crypto::mnemonic::{generate_seed_phrase, SeedStrength};
use crate::error::Result;
use super::address::{Address, ChainId};

/// A Lunes account: a key pair and the address it controls on one chain
#[derive(Clone)]
pub struct Account {
    /// The seed phrase, when the account was derived from one
    seed: Option<Zeroizing<String>>,
    /// Nonce mixed into the seed hash
    nonce: u32,
    /// The chain the address belongs to
    chain: ChainId,
    /// The account's keys
    key_pair: KeyPair,
    /// The account's address
    address: Address,
}

impl Account {
    /// Create an account with a freshly generated seed phrase and nonce 0
    pub fn new(chain: ChainId) -> Result<Self> {
        let phrase = generate_seed_phrase(SeedStrength::default())?;
        Ok(Self::from_seed(&phrase, 0, chain))
    }

    /// Recover an account from its seed phrase and nonce
    pub fn from_seed(phrase: &str, nonce: u32, chain: ChainId) -> Self {
        let key_pair = derive_key_pair(nonce, phrase);
        let mut account = Self::from_key_pair(key_pair, chain);
        account.seed = Some(Zeroizing::new(phrase.to_string()));
        account.nonce = nonce;
        account
    }

    /// Import an account from a base58 private key
    pub fn from_private_key(private_key: &str, chain: ChainId) -> Result<Self> {
        let private_key = PrivateKey::from_base58(private_key)?;
        Ok(Self::from_key_pair(KeyPair::from_private_key(private_key), chain))
    }

    fn from_key_pair(key_pair: KeyPair, chain: ChainId) -> Self {
        let address = Address::from_public_key(key_pair.public_key(), chain);
        tracing::debug!("Loaded account {} on chain {}", address, chain);

        Self {
            seed: None,
            nonce: 0,
            chain,
            key_pair,
            address,
        }
    }

    /// Get the seed phrase, if known
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_ref().map(|seed| seed.as_str())
    }

    /// Get the nonce
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Get the chain id
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Get the key pair
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        self.key_pair.private_key()
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        self.key_pair.public_key()
    }

    /// Get the address
    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("nonce", &self.nonce)
            .field("chain", &self.chain)
            .field("public_key", self.public_key())
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
