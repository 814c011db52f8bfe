//! Transfer signing

use crate::account::ChainId;
use crate::crypto::base58;
use crate::crypto::keys::{Curve25519, PrivateKey, SignatureScheme, SIGNATURE_LENGTH};
use crate::error::{Error, Result};
use super::types::{SignedTransfer, TransferTransaction};

/// Signs transfers with a [`SignatureScheme`]
#[derive(Debug, Clone, Default)]
pub struct TransferSigner<S = Curve25519> {
    scheme: S,
}

impl TransferSigner<Curve25519> {
    /// Signer using the Lunes curve25519 scheme
    pub fn new() -> Self {
        Self { scheme: Curve25519 }
    }
}

impl<S: SignatureScheme> TransferSigner<S> {
    /// Signer using a custom scheme
    pub fn with_scheme(scheme: S) -> Self {
        Self { scheme }
    }

    /// Serialize and sign `tx`, producing the broadcast-ready view.
    ///
    /// Readiness is not checked; use [`try_sign`](Self::try_sign) to refuse
    /// transfers the node would reject.
    pub fn sign(&self, private_key: &PrivateKey, tx: &TransferTransaction) -> SignedTransfer {
        let payload = tx.to_bytes();
        let signature = self.scheme.sign(private_key.as_bytes(), &payload);
        tracing::debug!("Signed {}-byte transfer payload for {}", payload.len(), tx.recipient);

        SignedTransfer {
            transaction_type: tx.transaction_type(),
            sender_public_key: tx.sender_public_key,
            signature: base58::encode(&signature),
            timestamp: tx.timestamp,
            fee: tx.fee,
            asset_id: tx.asset_id,
            fee_asset: tx.fee_asset,
            amount: tx.amount,
            recipient: tx.recipient.clone(),
            message: Some(base58::encode(&payload)),
        }
    }

    /// Sign `tx` only if it is ready for `chain`
    pub fn try_sign(&self, private_key: &PrivateKey, tx: &TransferTransaction, chain: ChainId) -> Result<SignedTransfer> {
        tx.check_ready(chain)?;
        Ok(self.sign(private_key, tx))
    }

    /// Check a signed transfer's signature against its sender key
    pub fn verify(&self, signed: &SignedTransfer) -> Result<bool> {
        let signature = base58::decode_array::<SIGNATURE_LENGTH>(&signed.signature)
            .map_err(|e| Error::Signing(format!("Malformed signature: {}", e)))?;
        let payload = signed.transaction().to_bytes();

        Ok(self.scheme.verify(signed.sender_public_key.as_bytes(), &payload, &signature))
    }
}

/// Sign a transfer with the default curve25519 scheme
pub fn sign_transfer(private_key: &PrivateKey, tx: &TransferTransaction) -> SignedTransfer {
    TransferSigner::new().sign(private_key, tx)
}

impl SignedTransfer {
    /// Verify the signature with the default curve25519 scheme
    pub fn verify(&self) -> Result<bool> {
        TransferSigner::new().verify(self)
    }
}
