//! Bundle Configuration
//!
//! Immutable per-bundle fee and capacity settings, fixed at construction.

use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;

use super::error::BundlerError;

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Hard cap the block engine places on transactions per bundle
pub const MAX_BUNDLE_TRANSACTIONS: usize = 5;

/// Fee and capacity settings for a bundle accumulator
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    /// Maximum number of buffered transactions
    pub max_transactions: usize,
    /// Validator tip in SOL, paid once per bundle
    pub tip_sol: f64,
    /// Compute-unit ceiling set on every bundled transaction
    pub compute_units: u32,
    /// Price per compute unit in micro-lamports
    pub compute_unit_price: u64,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            max_transactions: MAX_BUNDLE_TRANSACTIONS,
            tip_sol: 0.0001,
            compute_units: 200_000,
            compute_unit_price: 100_000,
        }
    }
}

impl BundleConfig {
    /// Set the buffer capacity
    pub fn with_max_transactions(mut self, max_transactions: usize) -> Self {
        self.max_transactions = max_transactions;
        self
    }

    /// Set the validator tip in SOL
    pub fn with_tip_sol(mut self, tip_sol: f64) -> Self {
        self.tip_sol = tip_sol;
        self
    }

    /// Set the per-transaction compute-unit ceiling
    pub fn with_compute_units(mut self, compute_units: u32) -> Self {
        self.compute_units = compute_units;
        self
    }

    /// Set the compute-unit price in micro-lamports
    pub fn with_compute_unit_price(mut self, compute_unit_price: u64) -> Self {
        self.compute_unit_price = compute_unit_price;
        self
    }

    /// Validate all fields. Every setting must be positive and the capacity
    /// must fit inside a single relay bundle.
    pub fn validate(&self) -> Result<(), BundlerError> {
        if self.max_transactions == 0 {
            return Err(BundlerError::InvalidConfig(
                "max_transactions must be > 0".to_string(),
            ));
        }

        if self.max_transactions > MAX_BUNDLE_TRANSACTIONS {
            return Err(BundlerError::InvalidConfig(format!(
                "max_transactions must be <= {}, got {}",
                MAX_BUNDLE_TRANSACTIONS, self.max_transactions
            )));
        }

        if !(self.tip_sol > 0.0) {
            return Err(BundlerError::InvalidConfig(format!(
                "tip_sol must be > 0, got {}",
                self.tip_sol
            )));
        }

        if self.compute_units == 0 {
            return Err(BundlerError::InvalidConfig(
                "compute_units must be > 0".to_string(),
            ));
        }

        if self.compute_unit_price == 0 {
            return Err(BundlerError::InvalidConfig(
                "compute_unit_price must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The two compute-budget instructions prepended to every bundled
    /// transaction: a compute-unit ceiling followed by a compute-unit price.
    pub fn fee_instructions(&self) -> Vec<Instruction> {
        vec![
            ComputeBudgetInstruction::set_compute_unit_limit(self.compute_units),
            ComputeBudgetInstruction::set_compute_unit_price(self.compute_unit_price),
        ]
    }

    /// The validator tip converted to lamports
    pub fn tip_lamports(&self) -> u64 {
        (self.tip_sol * LAMPORTS_PER_SOL as f64) as u64
    }
}
