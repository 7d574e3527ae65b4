//! PumpSwap Instruction Builders
//!
//! Raw instruction construction for the AMM program: anchor discriminators,
//! full account metas, little-endian args. Both mints are assumed to be
//! classic SPL Token.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};

use super::constants::{event_authority, fee_recipients, global_config, PUMPSWAP_PROGRAM_ID};
use super::error::PumpSwapError;
use super::pool::Pool;

/// Anchor discriminator for `buy`
pub const BUY_DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];

/// Anchor discriminator for `sell`
pub const SELL_DISCRIMINATOR: [u8; 8] = [51, 230, 133, 164, 1, 127, 131, 173];

/// Build a `buy` instruction: spend up to `max_quote_amount_in` quote tokens
/// for exactly `base_amount_out` base tokens.
pub fn buy(
    pool_address: &Pubkey,
    pool: &Pool,
    user: &Pubkey,
    base_amount_out: u64,
    max_quote_amount_in: u64,
) -> Result<Instruction, PumpSwapError> {
    let mut data = Vec::with_capacity(24);
    data.extend_from_slice(&BUY_DISCRIMINATOR);
    data.extend_from_slice(&base_amount_out.to_le_bytes());
    data.extend_from_slice(&max_quote_amount_in.to_le_bytes());

    Ok(Instruction {
        program_id: PUMPSWAP_PROGRAM_ID,
        accounts: swap_accounts(pool_address, pool, user)?,
        data,
    })
}

/// Build a `sell` instruction: trade exactly `base_amount_in` base tokens
/// for at least `min_quote_amount_out` quote tokens.
pub fn sell(
    pool_address: &Pubkey,
    pool: &Pool,
    user: &Pubkey,
    base_amount_in: u64,
    min_quote_amount_out: u64,
) -> Result<Instruction, PumpSwapError> {
    let mut data = Vec::with_capacity(24);
    data.extend_from_slice(&SELL_DISCRIMINATOR);
    data.extend_from_slice(&base_amount_in.to_le_bytes());
    data.extend_from_slice(&min_quote_amount_out.to_le_bytes());

    Ok(Instruction {
        program_id: PUMPSWAP_PROGRAM_ID,
        accounts: swap_accounts(pool_address, pool, user)?,
        data,
    })
}

/// Idempotent creation of the user's base and quote token accounts.
///
/// Prepended before a swap so first-time buyers do not need a separate setup
/// transaction.
pub fn create_user_token_accounts(user: &Pubkey, pool: &Pool) -> Vec<Instruction> {
    vec![
        create_associated_token_account_idempotent(user, user, &pool.base_mint, &spl_token::ID),
        create_associated_token_account_idempotent(user, user, &pool.quote_mint, &spl_token::ID),
    ]
}

/// Account list shared by `buy` and `sell` (the program uses the same order)
fn swap_accounts(
    pool_address: &Pubkey,
    pool: &Pool,
    user: &Pubkey,
) -> Result<Vec<AccountMeta>, PumpSwapError> {
    let protocol_fee_recipient = fee_recipients::random_fee_recipient()
        .parse::<Pubkey>()
        .map_err(|e| PumpSwapError::InvalidAddress(format!("fee recipient: {}", e)))?;

    let user_base_ata = get_associated_token_address(user, &pool.base_mint);
    let user_quote_ata = get_associated_token_address(user, &pool.quote_mint);
    let fee_recipient_ata =
        get_associated_token_address(&protocol_fee_recipient, &pool.quote_mint);

    Ok(vec![
        AccountMeta::new_readonly(*pool_address, false),
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(global_config(), false),
        AccountMeta::new_readonly(pool.base_mint, false),
        AccountMeta::new_readonly(pool.quote_mint, false),
        AccountMeta::new(user_base_ata, false),
        AccountMeta::new(user_quote_ata, false),
        AccountMeta::new(pool.pool_base_token_account, false),
        AccountMeta::new(pool.pool_quote_token_account, false),
        AccountMeta::new_readonly(protocol_fee_recipient, false),
        AccountMeta::new(fee_recipient_ata, false),
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        AccountMeta::new_readonly(event_authority(), false),
        AccountMeta::new_readonly(PUMPSWAP_PROGRAM_ID, false),
    ])
}
