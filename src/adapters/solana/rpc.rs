//! Solana RPC Client
//!
//! Async-compatible wrapper around the blocking RPC client. Implements the
//! `BlockhashProvider` port for the bundle accumulator.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey};
use thiserror::Error;

use crate::ports::blockhash::{BlockhashError, BlockhashProvider};

#[derive(Debug, Error, Clone)]
pub enum SolanaClientError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Wrapper around the Solana RPC client with async-compatible methods
#[derive(Clone)]
pub struct SolanaClient {
    client: Arc<RpcClient>,
}

impl SolanaClient {
    /// Create a new client with confirmed commitment
    pub fn new(rpc_url: String) -> Self {
        Self::with_commitment(rpc_url, CommitmentConfig::confirmed())
    }

    /// Create a new client with an explicit commitment level
    pub fn with_commitment(rpc_url: String, commitment: CommitmentConfig) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(rpc_url, commitment));
        Self { client }
    }

    /// Get SOL balance in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, SolanaClientError> {
        let pubkey = *pubkey;
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_balance(&pubkey)
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get the latest blockhash (needed for transaction building)
    pub async fn get_latest_blockhash(&self) -> Result<Hash, SolanaClientError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_latest_blockhash()
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get raw account data for an address
    pub async fn get_account_data(&self, pubkey: &Pubkey) -> Result<Vec<u8>, SolanaClientError> {
        let pubkey = *pubkey;
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_account_data(&pubkey)
                .map_err(|e| SolanaClientError::AccountNotFound(format!("{}: {}", pubkey, e)))
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }

    /// Get SPL token account balance in base units
    pub async fn get_token_account_balance(
        &self,
        token_account: &Pubkey,
    ) -> Result<u64, SolanaClientError> {
        let token_account = *token_account;
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || {
            client
                .get_token_account_balance(&token_account)
                .map_err(|e| SolanaClientError::RpcError(e.to_string()))
                .and_then(|balance| {
                    balance
                        .amount
                        .parse::<u64>()
                        .map_err(|e| SolanaClientError::RpcError(format!("Parse error: {}", e)))
                })
        })
        .await
        .map_err(|e| SolanaClientError::RpcError(format!("Task join error: {}", e)))?
    }
}

/// Parse a commitment level string from configuration
pub fn parse_commitment(commitment: &str) -> Result<CommitmentConfig, SolanaClientError> {
    CommitmentConfig::from_str(commitment)
        .map_err(|_| SolanaClientError::RpcError(format!("Invalid commitment: {}", commitment)))
}

#[async_trait]
impl BlockhashProvider for SolanaClient {
    async fn latest_blockhash(&self) -> Result<Hash, BlockhashError> {
        self.get_latest_blockhash()
            .await
            .map_err(|e| BlockhashError::Fetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SolanaClient::new("https://api.devnet.solana.com".to_string());
        assert!(std::mem::size_of_val(&client) > 0);
    }

    #[test]
    fn test_parse_commitment() {
        assert!(parse_commitment("confirmed").is_ok());
        assert!(parse_commitment("finalized").is_ok());
        assert!(parse_commitment("processed").is_ok());
        assert!(parse_commitment("bogus").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SolanaClientError::RpcError("test".to_string());
        assert!(err.to_string().contains("RPC request failed"));

        let err = SolanaClientError::AccountNotFound("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
