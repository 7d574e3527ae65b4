//! Jito Bundle Types
//!
//! Request and response types for the Block Engine JSON-RPC API.

use serde::{Deserialize, Serialize};

/// Transaction encoding parameter sent alongside the bundle
#[derive(Debug, Clone, Serialize)]
pub struct EncodingParam {
    /// Wire encoding of the serialized transactions
    pub encoding: String,
}

impl EncodingParam {
    pub fn base64() -> Self {
        Self {
            encoding: "base64".to_string(),
        }
    }
}

/// `sendBundle` request (JSON-RPC format)
#[derive(Debug, Clone, Serialize)]
pub struct SendBundleRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    /// Encoded transactions followed by the encoding descriptor
    pub params: (Vec<String>, EncodingParam),
}

impl SendBundleRequest {
    /// Create a new bundle request for base64-encoded transactions
    pub fn new(transactions: Vec<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "sendBundle".to_string(),
            params: (transactions, EncodingParam::base64()),
        }
    }
}

/// `getBundleStatuses` request (JSON-RPC format)
#[derive(Debug, Clone, Serialize)]
pub struct GetBundleStatusesRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Vec<String>>,
}

impl GetBundleStatusesRequest {
    pub fn new(bundle_ids: Vec<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "getBundleStatuses".to_string(),
            params: vec![bundle_ids],
        }
    }
}

/// JSON-RPC response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Response payload of `getBundleStatuses`
#[derive(Debug, Clone, Deserialize)]
pub struct GetBundleStatusesResponse {
    pub value: Vec<BundleStatusEntry>,
}

/// Status entry for a single bundle
#[derive(Debug, Clone, Deserialize)]
pub struct BundleStatusEntry {
    pub bundle_id: String,
    pub status: String,
    pub landed_slot: Option<u64>,
}

/// Lifecycle state of a submitted bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleStatus {
    /// Queued, not yet processed by the block engine
    Pending,
    /// Landed on chain
    Landed,
    /// Failed to land
    Failed,
    /// Dropped without inclusion
    Dropped,
    /// No record of the bundle (may have expired)
    Unknown,
}

impl BundleStatus {
    /// Parse the status string returned by the API
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "pending" => BundleStatus::Pending,
            "landed" => BundleStatus::Landed,
            "failed" => BundleStatus::Failed,
            "dropped" => BundleStatus::Dropped,
            _ => BundleStatus::Unknown,
        }
    }

    /// Check if the status is terminal
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            BundleStatus::Landed | BundleStatus::Failed | BundleStatus::Dropped
        )
    }

    /// Check if the bundle landed
    pub fn is_success(&self) -> bool {
        matches!(self, BundleStatus::Landed)
    }
}

impl std::fmt::Display for BundleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleStatus::Pending => write!(f, "pending"),
            BundleStatus::Landed => write!(f, "landed"),
            BundleStatus::Failed => write!(f, "failed"),
            BundleStatus::Dropped => write!(f, "dropped"),
            BundleStatus::Unknown => write!(f, "unknown"),
        }
    }
}
