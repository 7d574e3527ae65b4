//! Blockhash Provider Port
//!
//! Abstraction over the network call that fetches the latest blockhash,
//! so the accumulator can be tested without an RPC endpoint.

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use thiserror::Error;

/// Errors from a blockhash provider
#[derive(Debug, Error, Clone)]
pub enum BlockhashError {
    /// The underlying network call failed
    #[error("Blockhash fetch failed: {0}")]
    Fetch(String),
}

/// Source of the latest network blockhash, fetched once per submission
#[async_trait]
pub trait BlockhashProvider: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash, BlockhashError>;
}
