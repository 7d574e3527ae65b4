//! Bundle Accumulator
//!
//! Capacity-bounded FIFO buffer of pre-built transactions. Each submission
//! enriches every buffered transaction with compute-budget instructions and
//! hands the full ordered list to an injected relay client as one atomic
//! bundle.

use std::sync::Arc;

use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::ports::blockhash::BlockhashProvider;
use crate::ports::models::TradeSide;
use crate::ports::relay::{BundleRelay, BundleSubmission};

use super::config::BundleConfig;
use super::error::BundlerError;
use super::transaction::BundleTransaction;

/// Holds pending transactions and coordinates their enrichment and submission
/// as one atomic unit.
///
/// Single-owner, one submission in flight at a time. The relay and blockhash
/// dependencies are injected so tests can run against recording doubles.
pub struct BundleAccumulator {
    /// Fee and capacity settings, fixed at construction
    config: BundleConfig,
    /// External bundle-submission service
    relay: Arc<dyn BundleRelay>,
    /// Source of the fresh blockhash fetched once per submission
    blockhash: Arc<dyn BlockhashProvider>,
    /// Pending transactions, insertion order = submission order
    transactions: Vec<BundleTransaction>,
}

impl BundleAccumulator {
    /// Create an empty accumulator.
    ///
    /// Fails with `InvalidConfig` if any configuration field is out of range;
    /// a constructed accumulator always holds a valid config.
    pub fn new(
        config: BundleConfig,
        relay: Arc<dyn BundleRelay>,
        blockhash: Arc<dyn BlockhashProvider>,
    ) -> Result<Self, BundlerError> {
        config.validate()?;

        Ok(Self {
            config,
            relay,
            blockhash,
            transactions: Vec::new(),
        })
    }

    /// The configuration this accumulator was built with
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Current buffer length
    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the buffer holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Check if the buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.config.max_transactions
    }

    /// Append a transaction at the tail of the buffer.
    ///
    /// Fails with `CapacityExceeded` when the buffer is already full; the
    /// buffer is left untouched in that case.
    pub fn append(&mut self, transaction: BundleTransaction) -> Result<(), BundlerError> {
        if self.is_full() {
            return Err(BundlerError::CapacityExceeded {
                capacity: self.config.max_transactions,
            });
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// Clear the buffer unconditionally. Idempotent.
    pub fn reset(&mut self) {
        self.transactions.clear();
    }

    /// Submit the buffered transactions as one atomic bundle.
    ///
    /// Every buffered transaction gets the two compute-budget instructions
    /// prepended (original instruction order, fee payer, and recent-block
    /// reference preserved), then the full ordered list is handed to the
    /// relay along with a freshly fetched blockhash, the target pool, the
    /// configured tip, and the signing keypair.
    ///
    /// Returns the relay's opaque bundle id. On success the buffer is
    /// cleared; on failure it is left intact and the collaborator's error is
    /// propagated unmodified. No retries happen here.
    pub async fn submit(
        &mut self,
        pool: &Pubkey,
        signer: &Keypair,
    ) -> Result<String, BundlerError> {
        if self.transactions.is_empty() {
            return Err(BundlerError::EmptyBundle);
        }

        let fee_instructions = self.config.fee_instructions();
        let mut enriched = self.transactions.clone();
        for transaction in &mut enriched {
            transaction.prepend(fee_instructions.clone());
        }

        let recent_blockhash = self.blockhash.latest_blockhash().await?;

        tracing::debug!(
            pool = %pool,
            transactions = enriched.len(),
            tip_lamports = self.config.tip_lamports(),
            "submitting bundle"
        );

        let submission = BundleSubmission {
            side: TradeSide::Buy,
            recent_blockhash,
            transactions: enriched,
            pool: *pool,
            tip_lamports: self.config.tip_lamports(),
        };

        let bundle_id = self.relay.submit_bundle(submission, signer).await?;

        tracing::info!(bundle_id = %bundle_id, "bundle accepted by relay");
        self.transactions.clear();

        Ok(bundle_id)
    }
}
