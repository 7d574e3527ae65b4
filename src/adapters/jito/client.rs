//! Jito Bundle Client
//!
//! HTTP client for the Jito Block Engine JSON-RPC API. Signs and encodes
//! bundle transactions, submits them atomically, and checks bundle status.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use solana_sdk::{
    instruction::Instruction,
    message::VersionedMessage,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::VersionedTransaction,
};

use crate::bundler::MAX_BUNDLE_TRANSACTIONS;
use crate::ports::relay::{BundleRelay, BundleSubmission, RelayError};

use super::config::{tip_accounts, JitoConfig};
use super::error::JitoError;
use super::types::{
    BundleStatus, GetBundleStatusesRequest, GetBundleStatusesResponse, JsonRpcResponse,
    SendBundleRequest,
};

/// Jito Block Engine client for bundle submission
#[derive(Debug, Clone)]
pub struct JitoClient {
    /// Client configuration
    config: JitoConfig,
    /// HTTP client
    http: Client,
}

impl JitoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, JitoError> {
        Self::with_config(JitoConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: JitoConfig) -> Result<Self, JitoError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| JitoError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Get the configured block engine URL
    pub fn block_engine_url(&self) -> &str {
        &self.config.block_engine_url
    }

    /// Send a bundle of base64-encoded signed transactions.
    ///
    /// Returns the bundle id assigned by the block engine.
    pub async fn send_bundle(&self, transactions: Vec<String>) -> Result<String, JitoError> {
        if transactions.is_empty() {
            return Err(JitoError::InvalidBundle("Bundle cannot be empty".into()));
        }

        if transactions.len() > MAX_BUNDLE_TRANSACTIONS {
            return Err(JitoError::InvalidBundle(format!(
                "Bundle cannot contain more than {} transactions",
                MAX_BUNDLE_TRANSACTIONS
            )));
        }

        let request = SendBundleRequest::new(transactions);
        let response_text = self.post_rpc(&request).await?;
        let rpc_response: JsonRpcResponse<String> = serde_json::from_str(&response_text)?;

        if let Some(error) = rpc_response.error {
            return Err(JitoError::ApiError {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or_else(|| JitoError::ApiError {
            code: -1,
            message: "No bundle ID in response".into(),
        })
    }

    /// Get the status of a previously submitted bundle
    pub async fn get_bundle_status(&self, bundle_id: &str) -> Result<BundleStatus, JitoError> {
        let request = GetBundleStatusesRequest::new(vec![bundle_id.to_string()]);
        let response_text = self.post_rpc(&request).await?;

        let rpc_response: JsonRpcResponse<GetBundleStatusesResponse> =
            serde_json::from_str(&response_text)?;

        if let Some(error) = rpc_response.error {
            return Err(JitoError::StatusCheckFailed(error.message));
        }

        let statuses = rpc_response
            .result
            .ok_or_else(|| JitoError::StatusCheckFailed("No status in response".into()))?;

        let entry = statuses
            .value
            .into_iter()
            .find(|e| e.bundle_id == bundle_id)
            .ok_or_else(|| JitoError::StatusCheckFailed("Bundle not found".into()))?;

        Ok(BundleStatus::parse(&entry.status))
    }

    /// Create a tip transfer to a random Jito tip account
    pub fn tip_instruction(
        &self,
        payer: &Pubkey,
        tip_lamports: u64,
    ) -> Result<Instruction, JitoError> {
        if tip_lamports == 0 {
            return Err(JitoError::InvalidBundle("Tip amount cannot be zero".into()));
        }

        let tip_account = tip_accounts::random_tip_account()
            .parse::<Pubkey>()
            .map_err(|e| JitoError::InvalidBundle(format!("Invalid tip account: {}", e)))?;

        Ok(system_instruction::transfer(payer, &tip_account, tip_lamports))
    }

    /// POST a JSON-RPC request to the bundle endpoint and return the raw body
    async fn post_rpc<T: serde::Serialize>(&self, request: &T) -> Result<String, JitoError> {
        let url = format!("{}/api/v1/bundles", self.config.block_engine_url);

        let mut req_builder = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request);

        if let Some(ref token) = self.config.api_token {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = req_builder.send().await?;

        if response.status().as_u16() == 429 {
            return Err(JitoError::RateLimited);
        }

        Ok(response.text().await?)
    }

    /// Sign every transaction against the given blockhash and base64-encode
    /// the serialized bytes for the wire.
    fn sign_and_encode(
        &self,
        submission: &BundleSubmission,
        signer: &Keypair,
    ) -> Result<Vec<String>, JitoError> {
        let mut transactions = submission.transactions.clone();

        // the tip rides as the last instruction of the last transaction
        let tip = self.tip_instruction(&signer.pubkey(), submission.tip_lamports)?;
        if let Some(last) = transactions.last_mut() {
            last.push(tip);
        }

        let mut encoded = Vec::with_capacity(transactions.len());
        for transaction in &transactions {
            let message = transaction.compile(&submission.recent_blockhash);
            let signed =
                VersionedTransaction::try_new(VersionedMessage::Legacy(message), &[signer])
                    .map_err(|e| JitoError::SigningFailed(e.to_string()))?;
            let bytes = bincode::serialize(&signed)
                .map_err(|e| JitoError::SerializationError(e.to_string()))?;
            encoded.push(BASE64.encode(bytes));
        }

        Ok(encoded)
    }
}

#[async_trait]
impl BundleRelay for JitoClient {
    /// Submit the full ordered transaction list as one atomic bundle.
    ///
    /// Each transaction is recompiled against the freshly fetched blockhash
    /// and signed with the provided keypair before encoding. Failures map to
    /// the port error; there is no fallback to direct RPC submission.
    async fn submit_bundle(
        &self,
        submission: BundleSubmission,
        signer: &Keypair,
    ) -> Result<String, RelayError> {
        let encoded = self.sign_and_encode(&submission, signer)?;

        tracing::info!(
            pool = %submission.pool,
            side = %submission.side,
            transactions = encoded.len(),
            tip_lamports = submission.tip_lamports,
            "submitting bundle to block engine"
        );

        let bundle_id = self.send_bundle(encoded).await.map_err(|e| {
            tracing::error!("Bundle submission failed: {}", e);
            e
        })?;

        Ok(bundle_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::BundleTransaction;
    use crate::ports::models::TradeSide;
    use solana_sdk::hash::Hash;
    use std::str::FromStr;
    use std::time::Duration;

    #[test]
    fn test_client_creation_default() {
        let client = JitoClient::new().unwrap();
        assert!(client
            .block_engine_url()
            .contains("mainnet.block-engine.jito.wtf"));
    }

    #[test]
    fn test_client_creation_with_config() {
        let config = JitoConfig::mainnet("frankfurt").with_timeout(Duration::from_secs(60));
        let client = JitoClient::with_config(config).unwrap();
        assert!(client.block_engine_url().contains("frankfurt"));
    }

    #[test]
    fn test_tip_instruction() {
        let client = JitoClient::new().unwrap();
        let payer = Pubkey::from_str("11111111111111111111111111111111").unwrap();

        let ix = client.tip_instruction(&payer, 10_000).unwrap();
        assert_eq!(ix.program_id, solana_sdk::system_program::ID);
    }

    #[test]
    fn test_tip_instruction_zero_amount() {
        let client = JitoClient::new().unwrap();
        let payer = Pubkey::from_str("11111111111111111111111111111111").unwrap();

        let err = client.tip_instruction(&payer, 0).unwrap_err();
        assert!(matches!(err, JitoError::InvalidBundle(_)));
    }

    #[tokio::test]
    async fn test_send_bundle_empty_validation() {
        let client = JitoClient::new().unwrap();
        let err = client.send_bundle(vec![]).await.unwrap_err();

        match err {
            JitoError::InvalidBundle(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidBundle error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_bundle_too_many_transactions() {
        let client = JitoClient::new().unwrap();
        let transactions = (0..6).map(|i| format!("tx{}", i)).collect();

        let err = client.send_bundle(transactions).await.unwrap_err();
        match err {
            JitoError::InvalidBundle(msg) => assert!(msg.contains("more than 5")),
            other => panic!("Expected InvalidBundle error, got {:?}", other),
        }
    }

    fn submission_for(signer: &Keypair, count: usize) -> BundleSubmission {
        let transactions = (0..count)
            .map(|i| {
                let transfer = system_instruction::transfer(
                    &signer.pubkey(),
                    &Pubkey::new_unique(),
                    1 + i as u64,
                );
                BundleTransaction::new(signer.pubkey(), Hash::new_unique(), vec![transfer])
            })
            .collect();

        BundleSubmission {
            side: TradeSide::Buy,
            recent_blockhash: Hash::new_unique(),
            transactions,
            pool: Pubkey::new_unique(),
            tip_lamports: 100_000,
        }
    }

    #[test]
    fn test_sign_and_encode_produces_one_blob_per_transaction() {
        let client = JitoClient::new().unwrap();
        let signer = Keypair::new();
        let submission = submission_for(&signer, 3);

        let encoded = client.sign_and_encode(&submission, &signer).unwrap();
        assert_eq!(encoded.len(), 3);

        // every blob must round-trip back into a signed transaction
        for blob in &encoded {
            let bytes = BASE64.decode(blob).unwrap();
            let tx: VersionedTransaction = bincode::deserialize(&bytes).unwrap();
            assert_eq!(tx.signatures.len(), 1);
            assert_eq!(
                *tx.message.recent_blockhash(),
                submission.recent_blockhash
            );
        }
    }

    #[test]
    fn test_sign_and_encode_appends_tip_to_last_transaction() {
        let client = JitoClient::new().unwrap();
        let signer = Keypair::new();
        let submission = submission_for(&signer, 2);

        let encoded = client.sign_and_encode(&submission, &signer).unwrap();

        let last_bytes = BASE64.decode(&encoded[1]).unwrap();
        let last_tx: VersionedTransaction = bincode::deserialize(&last_bytes).unwrap();
        let first_bytes = BASE64.decode(&encoded[0]).unwrap();
        let first_tx: VersionedTransaction = bincode::deserialize(&first_bytes).unwrap();

        // one original transfer in the first, transfer plus tip in the last
        assert_eq!(first_tx.message.instructions().len(), 1);
        assert_eq!(last_tx.message.instructions().len(), 2);
    }

    #[test]
    fn test_sign_and_encode_rejects_foreign_payer() {
        let client = JitoClient::new().unwrap();
        let signer = Keypair::new();

        // transaction whose payer is not the signer cannot be signed
        let foreign = Keypair::new();
        let submission = BundleSubmission {
            side: TradeSide::Buy,
            recent_blockhash: Hash::new_unique(),
            transactions: vec![BundleTransaction::new(
                foreign.pubkey(),
                Hash::new_unique(),
                vec![system_instruction::transfer(
                    &foreign.pubkey(),
                    &Pubkey::new_unique(),
                    1,
                )],
            )],
            pool: Pubkey::new_unique(),
            tip_lamports: 100_000,
        };

        let err = client.sign_and_encode(&submission, &signer).unwrap_err();
        assert!(matches!(err, JitoError::SigningFailed(_)));
    }
}
