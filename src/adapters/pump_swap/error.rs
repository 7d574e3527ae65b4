//! PumpSwap Error Types

use thiserror::Error;

use crate::adapters::solana::SolanaClientError;

/// Errors from the PumpSwap venue SDK
#[derive(Debug, Error)]
pub enum PumpSwapError {
    /// Account data did not match the expected pool layout
    #[error("Invalid pool account: {0}")]
    InvalidPoolAccount(String),

    /// A well-known address string failed to parse
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The pool has no liquidity on one side
    #[error("Insufficient pool liquidity")]
    InsufficientLiquidity,

    /// A zero input or output amount was requested
    #[error("Trade amount must be > 0")]
    ZeroAmount,

    /// RPC failure while fetching pool state
    #[error(transparent)]
    Rpc(#[from] SolanaClientError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PumpSwapError::InvalidPoolAccount("bad discriminator".to_string());
        assert!(err.to_string().contains("bad discriminator"));

        assert!(PumpSwapError::ZeroAmount.to_string().contains("> 0"));
    }

    #[test]
    fn test_rpc_passthrough() {
        let rpc = SolanaClientError::RpcError("connection refused".to_string());
        let err: PumpSwapError = rpc.into();
        assert!(err.to_string().contains("connection refused"));
    }
}
