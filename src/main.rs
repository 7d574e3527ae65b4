//! PumpSwap Bundler - Atomic Trade Bundles for Solana
//!
//! Builds PumpSwap swap transactions and submits them as a single atomic
//! bundle through the Jito Block Engine.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use solana_sdk::pubkey::Pubkey;
use tracing_subscriber::{fmt, EnvFilter};

use pumpswap_bundler::adapters::cli::{BuyCmd, CliApp, Command, QuoteCmd, StatusCmd};
use pumpswap_bundler::adapters::jito::{JitoClient, JitoConfig};
use pumpswap_bundler::adapters::pump_swap::PumpSwapClient;
use pumpswap_bundler::adapters::solana::{parse_commitment, SolanaClient, WalletManager};
use pumpswap_bundler::bundler::{BundleAccumulator, BundleConfig, LAMPORTS_PER_SOL};
use pumpswap_bundler::config::{load_config, Config};
use pumpswap_bundler::ports::models::TradeSide;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (secrets go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Quote(cmd) => quote_command(cmd).await,
        Command::Buy(cmd) => buy_command(cmd).await,
        Command::Status(cmd) => status_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Build the RPC client from configuration
fn solana_client(config: &Config) -> Result<SolanaClient> {
    let commitment = parse_commitment(&config.solana.commitment)
        .context("Invalid commitment level in config")?;
    Ok(SolanaClient::with_commitment(
        config.solana.get_rpc_url(),
        commitment,
    ))
}

/// Load the signing wallet.
///
/// Checks the WALLET_PRIVATE_KEY environment variable (base58 secret key)
/// first, then falls back to the keypair file from the config.
fn load_wallet(config: &Config) -> Result<WalletManager> {
    if let Ok(encoded) = std::env::var("WALLET_PRIVATE_KEY") {
        return WalletManager::from_base58(&encoded)
            .context("WALLET_PRIVATE_KEY is not a valid base58 secret key");
    }

    let keypair_path = shellexpand::tilde(&config.solana.get_keypair_path()).to_string();
    if !std::path::Path::new(&keypair_path).exists() {
        bail!(
            "Wallet file not found: {}\n\n\
             To create a new wallet, run:\n  \
             solana-keygen new --outfile {}\n\n\
             Or set WALLET_PRIVATE_KEY in the environment.",
            keypair_path,
            keypair_path
        );
    }

    WalletManager::from_file(&keypair_path)
        .with_context(|| format!("Failed to load wallet from '{}'", keypair_path))
}

async fn quote_command(cmd: QuoteCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let solana = solana_client(&config)?;
    let pump_swap = PumpSwapClient::new(solana);

    let pool: Pubkey = cmd.pool.parse().context("Invalid pool address")?;
    let lamports = (cmd.amount * LAMPORTS_PER_SOL as f64) as u64;

    let (pool_state, quote) = pump_swap
        .quote_buy(&pool, lamports, cmd.slippage)
        .await
        .context("Failed to quote buy")?;

    println!("Pool:           {}", pool);
    println!("Base mint:      {}", pool_state.base_mint);
    println!("Spend:          {} SOL", cmd.amount);
    println!("Receive:        {} base units", quote.base_out);
    println!(
        "Max spend:      {:.9} SOL ({} bps slippage)",
        quote.max_quote_in as f64 / LAMPORTS_PER_SOL as f64,
        cmd.slippage
    );

    Ok(())
}

async fn buy_command(cmd: BuyCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;

    if cmd.count == 0 {
        bail!("--count must be at least 1");
    }
    if cmd.count > config.bundle.max_transactions {
        bail!(
            "--count {} exceeds the configured bundle capacity of {}",
            cmd.count,
            config.bundle.max_transactions
        );
    }

    let solana = solana_client(&config)?;
    let wallet = load_wallet(&config)?;
    let pump_swap = PumpSwapClient::new(solana.clone());
    let jito = JitoClient::with_config(JitoConfig::from(&config))
        .context("Failed to create Jito client")?;

    let pool: Pubkey = cmd.pool.parse().context("Invalid pool address")?;
    let lamports = (cmd.amount * LAMPORTS_PER_SOL as f64) as u64;

    tracing::info!(
        pool = %pool,
        wallet = %wallet.pubkey(),
        count = cmd.count,
        "preparing buy bundle"
    );

    let mut bundle = BundleAccumulator::new(
        BundleConfig::from(&config),
        Arc::new(jito),
        Arc::new(solana),
    )?;

    for _ in 0..cmd.count {
        let transaction = pump_swap
            .prepare_trade(&pool, &wallet.pubkey(), TradeSide::Buy, lamports, cmd.slippage)
            .await
            .context("Failed to build buy transaction")?;
        bundle.append(transaction)?;
    }

    let bundle_id = bundle
        .submit(&pool, wallet.keypair())
        .await
        .context("Bundle submission failed")?;

    println!("Bundle submitted: {}", bundle_id);
    println!("Check status with: pumpswap-bundler status {}", bundle_id);

    Ok(())
}

async fn status_command(cmd: StatusCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let jito = JitoClient::with_config(JitoConfig::from(&config))
        .context("Failed to create Jito client")?;

    let status = jito
        .get_bundle_status(&cmd.bundle_id)
        .await
        .context("Failed to fetch bundle status")?;

    println!("Bundle: {}", cmd.bundle_id);
    println!("Status: {}", status);
    if status.is_success() {
        println!("Bundle landed on chain.");
    } else if !status.is_final() {
        println!("Bundle is still in flight, check again shortly.");
    }

    Ok(())
}
