//! Transfer transaction types

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::account::Address;
use crate::crypto::base58;
use crate::crypto::keys::PublicKey;
use crate::error::{Error, Result};

/// Transaction type tag of a transfer
pub const TRANSFER_TYPE: u8 = 4;
/// Default transfer fee in the smallest unit (0.001 LUNES)
pub const TRANSFER_FEE: u64 = 100_000;
/// Length of an asset id in bytes
pub const ASSET_ID_LENGTH: usize = 32;

/// Identifier of an issued asset
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId([u8; ASSET_ID_LENGTH]);

impl AssetId {
    /// Wrap raw asset id bytes
    pub fn from_bytes(bytes: [u8; ASSET_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a base58 asset id
    pub fn from_base58(text: &str) -> Result<Self> {
        Ok(Self(base58::decode_array::<ASSET_ID_LENGTH>(text)?))
    }

    /// Get the raw asset id bytes
    pub fn as_bytes(&self) -> &[u8; ASSET_ID_LENGTH] {
        &self.0
    }

    /// Base58 text of the asset id
    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.to_base58())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for AssetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base58(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base58(&text).map_err(de::Error::custom)
    }
}

/// An unsigned transfer.
///
/// `None` for `asset_id` means the native LUNES token; `None` for `fee_asset`
/// means the fee is paid in LUNES.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTransaction {
    /// Public key of the sending account
    pub sender_public_key: PublicKey,
    /// Asset being transferred
    pub asset_id: Option<AssetId>,
    /// Asset the fee is paid in
    pub fee_asset: Option<AssetId>,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Amount in the asset's smallest unit
    pub amount: u64,
    /// Fee in the fee asset's smallest unit
    pub fee: u64,
    /// Receiving address
    pub recipient: Address,
}

/// A signed transfer in the shape the node's broadcast endpoint accepts.
///
/// Binary fields serialize as base58 text; absent assets are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransfer {
    /// Transaction type tag
    #[serde(rename = "type")]
    pub transaction_type: u8,
    /// Public key of the sending account
    pub sender_public_key: PublicKey,
    /// Base58 signature over the serialized transfer
    pub signature: String,
    /// Creation time in milliseconds
    pub timestamp: u64,
    /// Fee
    pub fee: u64,
    /// Asset being transferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    /// Asset the fee is paid in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_asset: Option<AssetId>,
    /// Amount
    pub amount: u64,
    /// Receiving address
    pub recipient: Address,
    /// Base58 of the signed bytes, set by the signer and not sent to the
    /// node; `None` after reading a transfer back from JSON
    #[serde(skip)]
    pub message: Option<String>,
}

impl SignedTransfer {
    /// The unsigned transfer these fields describe
    pub fn transaction(&self) -> TransferTransaction {
        TransferTransaction {
            sender_public_key: self.sender_public_key,
            asset_id: self.asset_id,
            fee_asset: self.fee_asset,
            timestamp: self.timestamp,
            amount: self.amount,
            fee: self.fee,
            recipient: self.recipient.clone(),
        }
    }

    /// Base58 of the signed bytes, recomputed when `message` is absent
    pub fn payload_base58(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => base58::encode(&self.transaction().to_bytes()),
        }
    }

    /// JSON document for the broadcast endpoint
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
