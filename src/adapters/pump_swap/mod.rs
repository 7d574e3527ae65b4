//! PumpSwap Adapter
//!
//! Thin SDK for the PumpSwap AMM: pool account decoding, constant-product
//! quoting against live reserves, and raw buy/sell instruction building. All
//! signing and submission happens elsewhere.

mod client;
mod constants;
mod error;
mod instructions;
mod pool;
mod quote;

pub use client::PumpSwapClient;
pub use constants::{event_authority, global_config, PUMPSWAP_PROGRAM_ID};
pub use error::PumpSwapError;
pub use instructions::{buy, create_user_token_accounts, sell};
pub use pool::{Pool, PoolReserves};
pub use quote::{quote_buy, quote_sell, BuyQuote, SellQuote, LP_FEE_BPS, PROTOCOL_FEE_BPS};
