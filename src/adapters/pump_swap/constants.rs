//! PumpSwap Program Constants
//!
//! Program addresses, PDA derivations, and the protocol fee recipient set.

use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// PumpSwap AMM program
pub const PUMPSWAP_PROGRAM_ID: Pubkey = pubkey!("pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA");

/// Seed for the global config PDA
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";

/// Seed for the anchor event authority PDA
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

/// Derive the global config PDA
pub fn global_config() -> Pubkey {
    Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], &PUMPSWAP_PROGRAM_ID).0
}

/// Derive the event authority PDA
pub fn event_authority() -> Pubkey {
    Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], &PUMPSWAP_PROGRAM_ID).0
}

/// Protocol fee recipients registered in the global config
pub mod fee_recipients {
    /// Accounts eligible to receive the protocol fee (any one works)
    pub const FEE_RECIPIENTS: &[&str] = &[
        "62qc2CNXwrYqQScmEdiZFFAnJR262PxWEuNQtxfafNgV",
        "7VtfL8fvgNfhz17qKRMjzQEXgbdpnHHHQRh54R9jP2RJ",
        "7hTckgnGnLQR6sdH7YkqFTAA7VwTfYFaZ6EhEsU3saCX",
        "9rPYyANsfQZw3DnDmKE3YCQF5E8oD89UXoHn9JFEhJUz",
        "AVmoTthdrX6tKt4nDjco2D775W2YK3sDhxPcMmzUAmTY",
        "FWsW1xNtWscwNmKv6wVsU1iTzRN6wmmk3MjxRP5tT7hz",
        "G5UZAVbAf46s7cKWoyKu8kYTip9DGTpbLZ2qa9Aq69dP",
        "JCRGumoE9Qi5BBgULTgdgTLjSgkCMSbF62ZZfGs84JeU",
    ];

    /// Get a random fee recipient
    pub fn random_fee_recipient() -> &'static str {
        use rand::Rng;
        let idx = rand::thread_rng().gen_range(0..FEE_RECIPIENTS.len());
        FEE_RECIPIENTS[idx]
    }
}
