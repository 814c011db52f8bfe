//! Transfer construction and canonical byte encoding
//!
//! The node rebuilds these exact bytes to check a signature, so field order
//! and widths are fixed: there are no length prefixes, and optional assets
//! are a flag byte (`0` absent, `1` present) followed by the 32-byte id.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::account::{Account, Address, ChainId};
use crate::crypto::keys::PublicKey;
use crate::error::{Error, Result};
use super::types::{AssetId, TransferTransaction, ASSET_ID_LENGTH, TRANSFER_FEE, TRANSFER_TYPE};

const FLAG_ABSENT: u8 = 0;
const FLAG_PRESENT: u8 = 1;

impl TransferTransaction {
    /// Transfer of native LUNES with the default fee, stamped with the current time
    pub fn new(sender_public_key: PublicKey, recipient: Address, amount: u64) -> Result<Self> {
        Ok(Self {
            sender_public_key,
            asset_id: None,
            fee_asset: None,
            timestamp: now_millis()?,
            amount,
            fee: TRANSFER_FEE,
            recipient,
        })
    }

    /// Transfer from `sender` to a base58 recipient address
    pub fn from_account(sender: &Account, recipient: &str, amount: u64) -> Result<Self> {
        Self::new(*sender.public_key(), Address::from_base58(recipient)?, amount)
    }

    /// Transfer an issued asset instead of LUNES
    pub fn with_asset(mut self, asset_id: AssetId) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    /// Pay the fee in an issued asset
    pub fn with_fee_asset(mut self, fee_asset: AssetId) -> Self {
        self.fee_asset = Some(fee_asset);
        self
    }

    /// Override the fee
    pub fn with_fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    /// Override the timestamp (milliseconds)
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Transaction type tag
    pub fn transaction_type(&self) -> u8 {
        TRANSFER_TYPE
    }

    /// Check the transfer can be signed and accepted on `chain`
    pub fn check_ready(&self, chain: ChainId) -> Result<()> {
        if self.amount == 0 {
            return Err(Error::Transaction("Amount must be greater than zero".to_string()));
        }
        if !self.recipient.is_valid(chain) {
            return Err(Error::Transaction(format!(
                "Recipient {} is not a valid address on chain {}",
                self.recipient, chain
            )));
        }
        Ok(())
    }

    /// Whether [`check_ready`](Self::check_ready) passes
    pub fn ready(&self, chain: ChainId) -> bool {
        self.check_ready(chain).is_ok()
    }

    /// Length of [`to_bytes`](Self::to_bytes) output
    pub fn serialized_len(&self) -> usize {
        1 + 32
            + optional_len(&self.asset_id)
            + optional_len(&self.fee_asset)
            + 8 * 3
            + self.recipient.as_bytes().len()
    }

    /// Canonical bytes that get signed
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialized_len());
        buf.push(TRANSFER_TYPE);
        buf.extend_from_slice(self.sender_public_key.as_bytes());
        write_optional(&mut buf, &self.asset_id);
        write_optional(&mut buf, &self.fee_asset);
        buf.extend_from_slice(&self.timestamp.to_be_bytes());
        buf.extend_from_slice(&self.amount.to_be_bytes());
        buf.extend_from_slice(&self.fee.to_be_bytes());
        buf.extend_from_slice(self.recipient.as_bytes());
        buf
    }
}

/// Canonical bytes of a transfer
pub fn serialize(tx: &TransferTransaction) -> Vec<u8> {
    tx.to_bytes()
}

fn optional_len(asset: &Option<AssetId>) -> usize {
    match asset {
        Some(_) => 1 + ASSET_ID_LENGTH,
        None => 1,
    }
}

fn write_optional(buf: &mut Vec<u8>, asset: &Option<AssetId>) {
    match asset {
        Some(id) => {
            buf.push(FLAG_PRESENT);
            buf.extend_from_slice(id.as_bytes());
        }
        None => buf.push(FLAG_ABSENT),
    }
}

fn now_millis() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Transaction(format!("System clock before Unix epoch: {}", e)))?;
    Ok(elapsed.as_millis() as u64)
}
