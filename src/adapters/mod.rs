//! Adapters Layer - External System Implementations
//!
//! Implementations of the port traits plus venue glue:
//! - Jito: atomic bundle submission to the Block Engine
//! - Solana: RPC client and wallet management
//! - PumpSwap: pool decoding, quoting, and instruction building
//! - CLI: command-line argument definitions

pub mod cli;
pub mod jito;
pub mod pump_swap;
pub mod solana;

pub use cli::CliApp;
pub use jito::{JitoClient, JitoConfig};
pub use pump_swap::PumpSwapClient;
pub use solana::{SolanaClient, WalletManager};
