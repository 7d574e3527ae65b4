//! PumpSwap Quote Math
//!
//! Constant-product pricing against live vault reserves. Fees are charged on
//! the quote side: 20 bps to LPs plus 5 bps protocol fee.

use super::error::PumpSwapError;
use super::pool::PoolReserves;

/// LP fee in basis points
pub const LP_FEE_BPS: u64 = 20;

/// Protocol fee in basis points
pub const PROTOCOL_FEE_BPS: u64 = 5;

/// Total fee charged on the quote side
pub const TOTAL_FEE_BPS: u64 = LP_FEE_BPS + PROTOCOL_FEE_BPS;

const BPS_DENOMINATOR: u64 = 10_000;

/// Quote for buying base tokens with a fixed quote amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyQuote {
    /// Base tokens received
    pub base_out: u64,
    /// Quote tokens spent (before slippage allowance)
    pub quote_in: u64,
    /// Worst-case quote spend accepted on chain
    pub max_quote_in: u64,
}

/// Quote for selling a fixed base amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellQuote {
    /// Base tokens sold
    pub base_in: u64,
    /// Quote tokens received after fees (before slippage allowance)
    pub quote_out: u64,
    /// Worst-case quote proceeds accepted on chain
    pub min_quote_out: u64,
}

/// Price a buy: how much base a given quote amount purchases.
///
/// Fees come off the quote input before the constant-product swap, matching
/// the program's rounding (floor division at every step).
pub fn quote_buy(
    reserves: &PoolReserves,
    quote_in: u64,
    slippage_bps: u16,
) -> Result<BuyQuote, PumpSwapError> {
    if quote_in == 0 {
        return Err(PumpSwapError::ZeroAmount);
    }
    if reserves.base == 0 || reserves.quote == 0 {
        return Err(PumpSwapError::InsufficientLiquidity);
    }

    let net_in = (quote_in as u128 * BPS_DENOMINATOR as u128)
        / (BPS_DENOMINATOR + TOTAL_FEE_BPS) as u128;
    let base_out = (reserves.base as u128 * net_in) / (reserves.quote as u128 + net_in);

    if base_out == 0 {
        return Err(PumpSwapError::ZeroAmount);
    }

    let max_quote_in =
        quote_in as u128 + (quote_in as u128 * slippage_bps as u128) / BPS_DENOMINATOR as u128;

    Ok(BuyQuote {
        base_out: base_out as u64,
        quote_in,
        max_quote_in: max_quote_in.min(u64::MAX as u128) as u64,
    })
}

/// Price a sell: how much quote a given base amount returns.
///
/// The constant-product output is computed first, then fees come off the
/// quote proceeds.
pub fn quote_sell(
    reserves: &PoolReserves,
    base_in: u64,
    slippage_bps: u16,
) -> Result<SellQuote, PumpSwapError> {
    if base_in == 0 {
        return Err(PumpSwapError::ZeroAmount);
    }
    if reserves.base == 0 || reserves.quote == 0 {
        return Err(PumpSwapError::InsufficientLiquidity);
    }

    let gross_out = (reserves.quote as u128 * base_in as u128)
        / (reserves.base as u128 + base_in as u128);
    let quote_out =
        (gross_out * (BPS_DENOMINATOR - TOTAL_FEE_BPS) as u128) / BPS_DENOMINATOR as u128;

    if quote_out == 0 {
        return Err(PumpSwapError::ZeroAmount);
    }

    let slippage = (slippage_bps as u64).min(BPS_DENOMINATOR);
    let min_quote_out = (quote_out * (BPS_DENOMINATOR - slippage) as u128) / BPS_DENOMINATOR as u128;

    Ok(SellQuote {
        base_in,
        quote_out: quote_out as u64,
        min_quote_out: min_quote_out as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserves(base: u64, quote: u64) -> PoolReserves {
        PoolReserves { base, quote }
    }

    #[test]
    fn test_buy_exact_small_numbers() {
        // net_in = 100 * 10000 / 10025 = 99
        // base_out = 100 * 99 / (100 + 99) = 49
        let quote = quote_buy(&reserves(100, 100), 100, 0).unwrap();
        assert_eq!(quote.base_out, 49);
        assert_eq!(quote.quote_in, 100);
        assert_eq!(quote.max_quote_in, 100);
    }

    #[test]
    fn test_buy_slippage_allowance() {
        let quote = quote_buy(&reserves(1_000_000, 1_000_000), 10_000, 100).unwrap();
        // 1% on top of the nominal spend
        assert_eq!(quote.max_quote_in, 10_100);
        assert!(quote.max_quote_in >= quote.quote_in);
    }

    #[test]
    fn test_buy_fee_reduces_output() {
        let r = reserves(1_000_000_000, 1_000_000_000);
        let with_fee = quote_buy(&r, 1_000_000, 0).unwrap().base_out;

        // no-fee constant product for comparison
        let no_fee =
            (r.base as u128 * 1_000_000u128 / (r.quote as u128 + 1_000_000u128)) as u64;
        assert!(with_fee < no_fee);
    }

    #[test]
    fn test_buy_output_bounded_by_reserve() {
        let r = reserves(1_000, 1_000);
        // even an enormous spend cannot drain the base reserve
        let quote = quote_buy(&r, u64::MAX / 2, 0).unwrap();
        assert!(quote.base_out < r.base);
    }

    #[test]
    fn test_buy_monotonic_in_input() {
        let r = reserves(5_000_000_000, 30_000_000_000);
        let small = quote_buy(&r, 1_000_000, 50).unwrap().base_out;
        let large = quote_buy(&r, 2_000_000, 50).unwrap().base_out;
        assert!(large > small);
    }

    #[test]
    fn test_buy_rejects_zero_and_empty() {
        assert!(matches!(
            quote_buy(&reserves(100, 100), 0, 0),
            Err(PumpSwapError::ZeroAmount)
        ));
        assert!(matches!(
            quote_buy(&reserves(0, 100), 10, 0),
            Err(PumpSwapError::InsufficientLiquidity)
        ));
        assert!(matches!(
            quote_buy(&reserves(100, 0), 10, 0),
            Err(PumpSwapError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn test_sell_exact_small_numbers() {
        // gross = 100 * 100 / 200 = 50
        // net = 50 * 9975 / 10000 = 49
        // min at 100 bps = 49 * 9900 / 10000 = 48
        let quote = quote_sell(&reserves(100, 100), 100, 100).unwrap();
        assert_eq!(quote.quote_out, 49);
        assert_eq!(quote.min_quote_out, 48);
        assert_eq!(quote.base_in, 100);
    }

    #[test]
    fn test_sell_roundtrip_loses_to_fees() {
        let r = reserves(1_000_000_000, 1_000_000_000);
        let spend = 10_000_000u64;

        let buy = quote_buy(&r, spend, 0).unwrap();
        // sell the purchased base straight back into the same reserves
        let sell = quote_sell(&r, buy.base_out, 0).unwrap();
        assert!(sell.quote_out < spend);
    }

    #[test]
    fn test_sell_rejects_zero_and_empty() {
        assert!(matches!(
            quote_sell(&reserves(100, 100), 0, 0),
            Err(PumpSwapError::ZeroAmount)
        ));
        assert!(matches!(
            quote_sell(&reserves(0, 0), 10, 0),
            Err(PumpSwapError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn test_dust_buy_rejected() {
        // 1 lamport into a deep pool buys nothing
        let r = reserves(1_000, 1_000_000_000_000);
        assert!(matches!(
            quote_buy(&r, 1, 0),
            Err(PumpSwapError::ZeroAmount)
        ));
    }
}
