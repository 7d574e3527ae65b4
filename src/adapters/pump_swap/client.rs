//! PumpSwap Client
//!
//! Venue glue: fetches pool state over RPC, prices trades against live
//! reserves, and prepares unsigned transactions ready for the bundle
//! accumulator.

use solana_sdk::pubkey::Pubkey;

use crate::adapters::solana::SolanaClient;
use crate::bundler::BundleTransaction;
use crate::ports::models::TradeSide;

use super::error::PumpSwapError;
use super::instructions;
use super::pool::{Pool, PoolReserves};
use super::quote::{self, BuyQuote, SellQuote};

/// Thin SDK over the PumpSwap AMM program
#[derive(Clone)]
pub struct PumpSwapClient {
    rpc: SolanaClient,
}

impl PumpSwapClient {
    /// Create a client over an existing RPC connection
    pub fn new(rpc: SolanaClient) -> Self {
        Self { rpc }
    }

    /// Fetch and decode a pool account
    pub async fn fetch_pool(&self, pool_address: &Pubkey) -> Result<Pool, PumpSwapError> {
        let data = self.rpc.get_account_data(pool_address).await?;
        Pool::deserialize(&data)
    }

    /// Fetch the live vault balances backing a pool
    pub async fn fetch_reserves(&self, pool: &Pool) -> Result<PoolReserves, PumpSwapError> {
        let base = self
            .rpc
            .get_token_account_balance(&pool.pool_base_token_account)
            .await?;
        let quote = self
            .rpc
            .get_token_account_balance(&pool.pool_quote_token_account)
            .await?;

        Ok(PoolReserves { base, quote })
    }

    /// Price a buy of `quote_in` quote tokens against current reserves
    pub async fn quote_buy(
        &self,
        pool_address: &Pubkey,
        quote_in: u64,
        slippage_bps: u16,
    ) -> Result<(Pool, BuyQuote), PumpSwapError> {
        let pool = self.fetch_pool(pool_address).await?;
        let reserves = self.fetch_reserves(&pool).await?;
        let buy_quote = quote::quote_buy(&reserves, quote_in, slippage_bps)?;

        tracing::debug!(
            pool = %pool_address,
            base_out = buy_quote.base_out,
            quote_in = buy_quote.quote_in,
            "priced buy against live reserves"
        );

        Ok((pool, buy_quote))
    }

    /// Price a sell of `base_in` base tokens against current reserves
    pub async fn quote_sell(
        &self,
        pool_address: &Pubkey,
        base_in: u64,
        slippage_bps: u16,
    ) -> Result<(Pool, SellQuote), PumpSwapError> {
        let pool = self.fetch_pool(pool_address).await?;
        let reserves = self.fetch_reserves(&pool).await?;
        let sell_quote = quote::quote_sell(&reserves, base_in, slippage_bps)?;

        Ok((pool, sell_quote))
    }

    /// Build an unsigned buy transaction from an already-priced quote.
    ///
    /// Includes idempotent user token-account creation ahead of the swap, so
    /// the transaction works for first-time buyers of the token.
    pub fn build_buy_transaction(
        &self,
        pool_address: &Pubkey,
        pool: &Pool,
        user: &Pubkey,
        buy_quote: &BuyQuote,
        recent_blockhash: solana_sdk::hash::Hash,
    ) -> Result<BundleTransaction, PumpSwapError> {
        let mut ixs = instructions::create_user_token_accounts(user, pool);
        ixs.push(instructions::buy(
            pool_address,
            pool,
            user,
            buy_quote.base_out,
            buy_quote.max_quote_in,
        )?);

        Ok(BundleTransaction::new(*user, recent_blockhash, ixs))
    }

    /// Build an unsigned sell transaction from an already-priced quote
    pub fn build_sell_transaction(
        &self,
        pool_address: &Pubkey,
        pool: &Pool,
        user: &Pubkey,
        sell_quote: &SellQuote,
        recent_blockhash: solana_sdk::hash::Hash,
    ) -> Result<BundleTransaction, PumpSwapError> {
        let ix = instructions::sell(
            pool_address,
            pool,
            user,
            sell_quote.base_in,
            sell_quote.min_quote_out,
        )?;

        Ok(BundleTransaction::new(*user, recent_blockhash, vec![ix]))
    }

    /// Fetch, price, and build in one call: an unsigned transaction trading
    /// `amount` against the pool in the given direction.
    pub async fn prepare_trade(
        &self,
        pool_address: &Pubkey,
        user: &Pubkey,
        side: TradeSide,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<BundleTransaction, PumpSwapError> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(PumpSwapError::Rpc)?;

        match side {
            TradeSide::Buy => {
                let (pool, buy_quote) =
                    self.quote_buy(pool_address, amount, slippage_bps).await?;
                self.build_buy_transaction(pool_address, &pool, user, &buy_quote, blockhash)
            }
            TradeSide::Sell => {
                let (pool, sell_quote) =
                    self.quote_sell(pool_address, amount, slippage_bps).await?;
                self.build_sell_transaction(pool_address, &pool, user, &sell_quote, blockhash)
            }
        }
    }
}
