//! PumpSwap Pool Account
//!
//! Manual decode of the on-chain pool account. The layout is fixed-offset
//! (anchor discriminator followed by scalar and pubkey fields), so a byte
//! cursor is all that is needed.

use solana_sdk::pubkey::Pubkey;

use super::error::PumpSwapError;

/// Anchor account discriminator for `Pool`
pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];

/// Serialized pool size: discriminator + bump + index + 6 pubkeys + lp supply
pub const POOL_ACCOUNT_LEN: usize = 8 + 1 + 2 + 32 * 6 + 8;

/// Decoded PumpSwap pool state
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    /// PDA bump of the pool account
    pub bump: u8,
    /// Pool index under the creator
    pub index: u16,
    /// Wallet that created the pool
    pub creator: Pubkey,
    /// Token being traded
    pub base_mint: Pubkey,
    /// Token the pool is quoted in (WSOL for launch pools)
    pub quote_mint: Pubkey,
    /// LP token mint
    pub lp_mint: Pubkey,
    /// Pool vault holding base tokens
    pub pool_base_token_account: Pubkey,
    /// Pool vault holding quote tokens
    pub pool_quote_token_account: Pubkey,
    /// Outstanding LP token supply
    pub lp_supply: u64,
}

impl Pool {
    /// Decode a pool from raw account data.
    ///
    /// Fails if the data is too short or the discriminator does not match.
    pub fn deserialize(data: &[u8]) -> Result<Self, PumpSwapError> {
        if data.len() < POOL_ACCOUNT_LEN {
            return Err(PumpSwapError::InvalidPoolAccount(format!(
                "Account too small: {} bytes, expected at least {}",
                data.len(),
                POOL_ACCOUNT_LEN
            )));
        }

        if data[..8] != POOL_DISCRIMINATOR {
            return Err(PumpSwapError::InvalidPoolAccount(
                "Discriminator mismatch, not a pool account".to_string(),
            ));
        }

        let mut cursor = Cursor::new(&data[8..]);
        Ok(Self {
            bump: cursor.read_u8(),
            index: cursor.read_u16(),
            creator: cursor.read_pubkey(),
            base_mint: cursor.read_pubkey(),
            quote_mint: cursor.read_pubkey(),
            lp_mint: cursor.read_pubkey(),
            pool_base_token_account: cursor.read_pubkey(),
            pool_quote_token_account: cursor.read_pubkey(),
            lp_supply: cursor.read_u64(),
        })
    }

    /// Encode the pool back to account bytes (test fixtures)
    #[cfg(test)]
    pub fn serialize(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(POOL_ACCOUNT_LEN);
        data.extend_from_slice(&POOL_DISCRIMINATOR);
        data.push(self.bump);
        data.extend_from_slice(&self.index.to_le_bytes());
        data.extend_from_slice(self.creator.as_ref());
        data.extend_from_slice(self.base_mint.as_ref());
        data.extend_from_slice(self.quote_mint.as_ref());
        data.extend_from_slice(self.lp_mint.as_ref());
        data.extend_from_slice(self.pool_base_token_account.as_ref());
        data.extend_from_slice(self.pool_quote_token_account.as_ref());
        data.extend_from_slice(&self.lp_supply.to_le_bytes());
        data
    }
}

/// Vault balances backing a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    /// Base tokens in the pool vault
    pub base: u64,
    /// Quote tokens in the pool vault
    pub quote: u64,
}

/// Little-endian byte cursor over pre-validated account data
struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn read_u8(&mut self) -> u8 {
        let value = self.data[self.offset];
        self.offset += 1;
        value
    }

    fn read_u16(&mut self) -> u16 {
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + 2]);
        self.offset += 2;
        u16::from_le_bytes(bytes)
    }

    fn read_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + 8]);
        self.offset += 8;
        u64::from_le_bytes(bytes)
    }

    fn read_pubkey(&mut self) -> Pubkey {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.data[self.offset..self.offset + 32]);
        self.offset += 32;
        Pubkey::new_from_array(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> Pool {
        Pool {
            bump: 254,
            index: 3,
            creator: Pubkey::new_unique(),
            base_mint: Pubkey::new_unique(),
            quote_mint: Pubkey::new_unique(),
            lp_mint: Pubkey::new_unique(),
            pool_base_token_account: Pubkey::new_unique(),
            pool_quote_token_account: Pubkey::new_unique(),
            lp_supply: 1_000_000_000,
        }
    }

    #[test]
    fn test_pool_roundtrip() {
        let pool = sample_pool();
        let data = pool.serialize();

        assert_eq!(data.len(), POOL_ACCOUNT_LEN);
        let decoded = Pool::deserialize(&data).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn test_pool_rejects_short_data() {
        let err = Pool::deserialize(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, PumpSwapError::InvalidPoolAccount(_)));
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn test_pool_rejects_wrong_discriminator() {
        let mut data = sample_pool().serialize();
        data[0] ^= 0xff;

        let err = Pool::deserialize(&data).unwrap_err();
        assert!(err.to_string().contains("Discriminator"));
    }

    #[test]
    fn test_pool_tolerates_trailing_bytes() {
        // on-chain accounts may carry extra fields appended by later
        // program versions
        let pool = sample_pool();
        let mut data = pool.serialize();
        data.extend_from_slice(&[0u8; 64]);

        let decoded = Pool::deserialize(&data).unwrap();
        assert_eq!(decoded, pool);
    }
}
