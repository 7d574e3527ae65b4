//! Bundle Relay Port
//!
//! Abstraction over the external bundle-submission service. The accumulator
//! hands the relay a fully ordered transaction list plus the signing
//! credential; signing, wire encoding, and transport are the relay's problem.

use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Keypair};
use thiserror::Error;

use crate::bundler::BundleTransaction;
use crate::ports::models::TradeSide;

/// Errors surfaced by a bundle relay
#[derive(Debug, Error, Clone)]
pub enum RelayError {
    /// The relay rejected the bundle (invalid, too large, simulation failed)
    #[error("Bundle rejected: {0}")]
    Rejected(String),

    /// Signing a bundled transaction failed
    #[error("Transaction signing failed: {0}")]
    Signing(String),

    /// Transport-level failure talking to the relay
    #[error("Relay transport error: {0}")]
    Transport(String),

    /// Relay rate limit hit
    #[error("Rate limited by relay")]
    RateLimited,

    /// The relay call timed out
    #[error("Relay request timed out")]
    Timeout,
}

/// Everything a relay needs to turn buffered transactions into a bundle
#[derive(Debug, Clone)]
pub struct BundleSubmission {
    /// Direction of the trade the bundle executes
    pub side: TradeSide,
    /// Freshly fetched blockhash the relay signs against
    pub recent_blockhash: Hash,
    /// Full ordered transaction list, submission order = buffer order
    pub transactions: Vec<BundleTransaction>,
    /// Target venue (pool) the transactions trade against
    pub pool: Pubkey,
    /// Validator tip in lamports, paid by the signer
    pub tip_lamports: u64,
}

/// External bundle-submission service
#[async_trait]
pub trait BundleRelay: Send + Sync {
    /// Submit a bundle, returning the relay's opaque bundle id
    async fn submit_bundle(
        &self,
        submission: BundleSubmission,
        signer: &Keypair,
    ) -> Result<String, RelayError>;
}
