//! Bundle Accumulator Core
//!
//! Capacity-bounded buffering of pre-built transactions, compute-budget
//! enrichment, and atomic submission through an injected relay.

mod accumulator;
mod config;
mod error;
mod transaction;

pub use accumulator::BundleAccumulator;
pub use config::{BundleConfig, LAMPORTS_PER_SOL, MAX_BUNDLE_TRANSACTIONS};
pub use error::BundlerError;
pub use transaction::BundleTransaction;
