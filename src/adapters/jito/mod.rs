//! Jito Bundle Adapter
//!
//! Atomic multi-transaction bundles via the Jito Block Engine. Implements the
//! `BundleRelay` port: signing, tip placement, wire encoding, and JSON-RPC
//! submission.

mod client;
mod config;
mod error;
mod types;

pub use client::JitoClient;
pub use config::JitoConfig;
pub use error::JitoError;
pub use types::{BundleStatus, BundleStatusEntry};
