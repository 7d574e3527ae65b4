//! CLI Command Definitions
//!
//! Argument parsing for the bundle submitter. Command handlers live in the
//! binary entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PumpSwap Bundler - Atomic trade bundles via the Jito Block Engine
#[derive(Parser, Debug)]
#[command(
    name = "pumpswap-bundler",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Atomic PumpSwap trade bundles via the Jito Block Engine",
    long_about = "Builds PumpSwap swap transactions, enriches them with compute-budget \
                  instructions, and submits them as a single atomic Jito bundle."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preview a buy against a pool without sending anything
    Quote(QuoteCmd),

    /// Buy through a pool, submitted as one atomic bundle
    Buy(BuyCmd),

    /// Check the status of a submitted bundle
    Status(StatusCmd),
}

/// Preview a buy quote
#[derive(Parser, Debug)]
pub struct QuoteCmd {
    /// Pool address to quote against
    #[arg(value_name = "POOL")]
    pub pool: String,

    /// Amount of SOL to spend
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// Slippage tolerance in basis points (default: 100 = 1%)
    #[arg(long, value_name = "BPS", default_value = "100")]
    pub slippage: u16,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/mainnet.toml")]
    pub config: PathBuf,
}

/// Execute a bundled buy
#[derive(Parser, Debug)]
pub struct BuyCmd {
    /// Pool address to trade against
    #[arg(value_name = "POOL")]
    pub pool: String,

    /// Amount of SOL to spend per transaction
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// Number of identical buy transactions to bundle
    #[arg(long, value_name = "N", default_value = "1")]
    pub count: usize,

    /// Slippage tolerance in basis points (default: 100 = 1%)
    #[arg(long, value_name = "BPS", default_value = "100")]
    pub slippage: u16,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/mainnet.toml")]
    pub config: PathBuf,
}

/// Check bundle status
#[derive(Parser, Debug)]
pub struct StatusCmd {
    /// Bundle id returned at submission
    #[arg(value_name = "BUNDLE_ID")]
    pub bundle_id: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/mainnet.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let args = vec!["pumpswap-bundler", "quote", "PoolAddr111", "0.5"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Quote(cmd) => {
                assert_eq!(cmd.pool, "PoolAddr111");
                assert_eq!(cmd.amount, 0.5);
                assert_eq!(cmd.slippage, 100);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_parse_buy_defaults() {
        let args = vec!["pumpswap-bundler", "buy", "PoolAddr111", "0.25"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Buy(cmd) => {
                assert_eq!(cmd.count, 1);
                assert_eq!(cmd.slippage, 100);
                assert_eq!(cmd.config, PathBuf::from("config/mainnet.toml"));
            }
            _ => panic!("Expected Buy command"),
        }
    }

    #[test]
    fn test_parse_buy_with_count_and_slippage() {
        let args = vec![
            "pumpswap-bundler",
            "buy",
            "PoolAddr111",
            "0.25",
            "--count",
            "4",
            "--slippage",
            "250",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Buy(cmd) => {
                assert_eq!(cmd.count, 4);
                assert_eq!(cmd.slippage, 250);
            }
            _ => panic!("Expected Buy command"),
        }
    }

    #[test]
    fn test_parse_status() {
        let args = vec!["pumpswap-bundler", "status", "abc-123"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Status(cmd) => assert_eq!(cmd.bundle_id, "abc-123"),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["pumpswap-bundler", "-v", "--debug", "status", "abc"];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }
}
