//! Seed phrase generation
//!
//! Lunes feeds the phrase text straight into the seed hash, so any string is
//! a usable seed. New accounts get a BIP-39 word list phrase because it is
//! easy to write down and has a checksum for typo detection.

use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Supported seed phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrength {
    /// 12 words (128 bits)
    #[default]
    Words12,
    /// 24 words (256 bits)
    Words24,
}

impl SeedStrength {
    fn entropy_bytes(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words24 => 32,
        }
    }

    /// Number of words in a phrase of this strength
    pub fn word_count(&self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words24 => 24,
        }
    }
}

/// Generate a new random seed phrase
pub fn generate_seed_phrase(strength: SeedStrength) -> Result<Zeroizing<String>> {
    let mut entropy = Zeroizing::new(vec![0u8; strength.entropy_bytes()]);
    OsRng.fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Check a phrase against the BIP-39 word list and checksum.
///
/// Imported phrases that fail this check are still valid Lunes seeds; callers
/// use it only to warn about probable typos.
pub fn validate_seed_phrase(phrase: &str) -> Result<()> {
    Mnemonic::parse_normalized(phrase)
        .map(|_| ())
        .map_err(|e| Error::Mnemonic(e.to_string()))
}
