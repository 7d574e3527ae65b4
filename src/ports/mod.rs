//! Ports Layer - Trait definitions for external dependencies
//!
//! Interfaces the bundle accumulator depends on, abstracting:
//! - Bundle relay submission (Jito Block Engine)
//! - Latest-blockhash fetching (Solana RPC)
//!
//! Adapters implement these traits; tests substitute the recording doubles
//! from `mocks`.

pub mod blockhash;
pub mod mocks;
pub mod models;
pub mod relay;

pub use blockhash::{BlockhashError, BlockhashProvider};
pub use models::TradeSide;
pub use relay::{BundleRelay, BundleSubmission, RelayError};
