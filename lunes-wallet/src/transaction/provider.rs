//! Node provider for broadcasting signed transfers

use std::time::Duration;

use crate::error::{Error, Result};
use super::types::SignedTransfer;

/// Public Lunes mainnet node
pub const MAINNET_NODE_URL: &str = "https://lunesnode.lunes.io";
/// Public Lunes testnet node
pub const TESTNET_NODE_URL: &str = "https://lunesnode-testnet.lunes.io";

const BROADCAST_PATH: &str = "/transactions/broadcast";

/// Node configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Node base URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl NodeConfig {
    /// Configuration for the public mainnet node
    pub fn mainnet() -> Self {
        Self {
            url: MAINNET_NODE_URL.to_string(),
            timeout: Some(30),
        }
    }

    /// Configuration for the public testnet node
    pub fn testnet() -> Self {
        Self {
            url: TESTNET_NODE_URL.to_string(),
            timeout: Some(30),
        }
    }

    /// Read `LUNES_NODE_URL` and `LUNES_NODE_TIMEOUT`, defaulting to mainnet
    pub fn from_env() -> Result<Self> {
        let mut config = Self::mainnet();

        if let Ok(url) = std::env::var("LUNES_NODE_URL") {
            config.url = url;
        }
        if let Ok(timeout) = std::env::var("LUNES_NODE_TIMEOUT") {
            let seconds = timeout
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("Invalid LUNES_NODE_TIMEOUT '{}': {}", timeout, e)))?;
            config.timeout = Some(seconds);
        }

        Ok(config)
    }

    fn broadcast_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), BROADCAST_PATH)
    }
}

/// HTTP client for a Lunes node
#[derive(Debug, Clone)]
pub struct NodeProvider {
    /// Node configuration
    config: NodeConfig,
    /// HTTP client
    client: reqwest::Client,
}

impl NodeProvider {
    /// Create a new provider
    pub fn new(config: NodeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Get the configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// POST a signed transfer to the node.
    ///
    /// The node's response is returned as-is, whatever its status; only
    /// transport failures become errors.
    pub async fn broadcast(&self, transfer: &SignedTransfer) -> Result<reqwest::Response> {
        let url = self.config.broadcast_url();
        tracing::info!("Broadcasting transfer to {}", url);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(transfer)
            .send()
            .await?;

        tracing::debug!("Node responded with status {}", response.status());
        Ok(response)
    }
}
