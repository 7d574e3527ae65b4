#![allow(dead_code, unused_imports, unused_variables)]
//! PumpSwap Bundler - Atomic Trade Bundles for Solana
//!
//! Collects pre-built PumpSwap transactions into a capacity-bounded buffer,
//! enriches each with compute-budget instructions, and submits the whole
//! buffer as one atomic bundle through the Jito Block Engine.
//!
//! # Modules
//!
//! - `bundler`: Core accumulator (buffer, enrichment, submission)
//! - `ports`: Trait abstractions (BundleRelay, BlockhashProvider) and mocks
//! - `adapters`: External implementations (Jito, Solana, PumpSwap, CLI)
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod bundler;
pub mod config;
pub mod ports;

pub use bundler::{BundleAccumulator, BundleConfig, BundleTransaction, BundlerError};
