//! Wallet Manager
//!
//! Keypair loading for the bundle signer. Supports the solana-keygen JSON
//! keyfile format, raw bytes, and base58-encoded secret keys from the
//! environment.

use std::fs;
use std::path::Path;

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to load keypair from file: {0}")]
    LoadError(String),
    #[error("Invalid keypair bytes: {0}")]
    InvalidKeypair(String),
    #[error("Invalid base58 secret key: {0}")]
    InvalidBase58(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Holds the signing keypair for bundle submission
pub struct WalletManager {
    keypair: Keypair,
}

impl WalletManager {
    /// Load keypair from a file path (JSON array format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::LoadError(format!("Failed to read file: {}", e)))?;

        let bytes: Vec<u8> = serde_json::from_str(&contents)
            .map_err(|e| WalletError::LoadError(format!("Invalid JSON format: {}", e)))?;

        Self::from_bytes(&bytes)
    }

    /// Load keypair from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        let keypair =
            Keypair::try_from(bytes).map_err(|e| WalletError::InvalidKeypair(e.to_string()))?;

        Ok(Self { keypair })
    }

    /// Load keypair from a base58-encoded secret key string
    pub fn from_base58(encoded: &str) -> Result<Self, WalletError> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|e| WalletError::InvalidBase58(e.to_string()))?;

        Self::from_bytes(&bytes)
    }

    /// Create a new random keypair (for testing)
    pub fn new_random() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Get the public key as a string
    pub fn public_key(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    /// Get the public key as Pubkey
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get keypair reference for signing
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}
