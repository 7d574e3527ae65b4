//! Solana Adapter
//!
//! RPC client wrapper and wallet management.

mod rpc;
mod wallet;

pub use rpc::{parse_commitment, SolanaClient, SolanaClientError};
pub use wallet::{WalletError, WalletManager};
