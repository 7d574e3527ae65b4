//! Port Test Doubles
//!
//! Hand-rolled recording mocks for the relay and blockhash ports. Used by
//! unit tests and the integration suite; no network involved.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solana_sdk::{hash::Hash, signature::Keypair};

use super::blockhash::{BlockhashError, BlockhashProvider};
use super::relay::{BundleRelay, BundleSubmission, RelayError};

/// Mock relay that records every submission and returns a canned response
#[derive(Debug)]
pub struct RecordingRelay {
    submissions: Arc<Mutex<Vec<BundleSubmission>>>,
    response: Result<String, RelayError>,
}

impl RecordingRelay {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            response: Ok("mock-bundle-id".to_string()),
        }
    }

    /// Builder method to set the bundle id returned on success
    pub fn with_bundle_id(mut self, bundle_id: &str) -> Self {
        self.response = Ok(bundle_id.to_string());
        self
    }

    /// Builder method to make every submission fail as a transport error
    pub fn with_failure(mut self, message: &str) -> Self {
        self.response = Err(RelayError::Transport(message.to_string()));
        self
    }

    /// Builder method to fail with a specific relay error
    pub fn with_error(mut self, error: RelayError) -> Self {
        self.response = Err(error);
        self
    }

    /// All recorded submissions, in call order
    pub fn submissions(&self) -> Vec<BundleSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Default for RecordingRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BundleRelay for RecordingRelay {
    async fn submit_bundle(
        &self,
        submission: BundleSubmission,
        _signer: &Keypair,
    ) -> Result<String, RelayError> {
        self.submissions.lock().unwrap().push(submission);
        self.response.clone()
    }
}

/// Blockhash provider that always returns the same hash
#[derive(Debug, Default)]
pub struct StaticBlockhash {
    hash: Hash,
}

impl StaticBlockhash {
    pub fn new(hash: Hash) -> Self {
        Self { hash }
    }
}

#[async_trait]
impl BlockhashProvider for StaticBlockhash {
    async fn latest_blockhash(&self) -> Result<Hash, BlockhashError> {
        Ok(self.hash)
    }
}

/// Blockhash provider that always fails
#[derive(Debug)]
pub struct FailingBlockhash {
    message: String,
}

impl FailingBlockhash {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl BlockhashProvider for FailingBlockhash {
    async fn latest_blockhash(&self) -> Result<Hash, BlockhashError> {
        Err(BlockhashError::Fetch(self.message.clone()))
    }
}
