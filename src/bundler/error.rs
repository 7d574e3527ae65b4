//! Bundler Error Types
//!
//! Error handling for bundle accumulation and submission.

use thiserror::Error;

use crate::ports::blockhash::BlockhashError;
use crate::ports::relay::RelayError;

/// Errors raised by the bundle accumulator
#[derive(Debug, Error, Clone)]
pub enum BundlerError {
    /// Append was attempted on a full buffer
    #[error("Bundle capacity exceeded: buffer already holds {capacity} transactions")]
    CapacityExceeded { capacity: usize },

    /// Submit was attempted on an empty buffer
    #[error("Bundle is empty: append at least one transaction before submitting")]
    EmptyBundle,

    /// Bundle configuration failed validation
    #[error("Invalid bundle configuration: {0}")]
    InvalidConfig(String),

    /// Blockhash fetch failed, passed through from the provider
    #[error(transparent)]
    Blockhash(#[from] BlockhashError),

    /// Relay call failed, passed through from the relay client
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl BundlerError {
    /// Check if the error was caused by caller input rather than a collaborator.
    ///
    /// Input errors are non-retriable: resubmitting the same call fails the
    /// same way.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BundlerError::CapacityExceeded { .. }
                | BundlerError::EmptyBundle
                | BundlerError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        assert!(BundlerError::CapacityExceeded { capacity: 5 }.is_input_error());
        assert!(BundlerError::EmptyBundle.is_input_error());
        assert!(BundlerError::InvalidConfig("tip".into()).is_input_error());

        assert!(!BundlerError::Relay(RelayError::RateLimited).is_input_error());
        assert!(!BundlerError::Blockhash(BlockhashError::Fetch("down".into())).is_input_error());
    }

    #[test]
    fn test_error_display() {
        let err = BundlerError::CapacityExceeded { capacity: 4 };
        assert!(err.to_string().contains("4"));

        let err = BundlerError::EmptyBundle;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_passthrough_preserves_message() {
        let relay = RelayError::Rejected("simulation failed".to_string());
        let err: BundlerError = relay.into();
        assert!(err.to_string().contains("simulation failed"));
    }
}
