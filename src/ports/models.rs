//! Shared Port Models
//!
//! Small value types shared between the bundler core and the adapters.

use serde::{Deserialize, Serialize};

/// Direction of a trade against a venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    /// Spend quote tokens, receive base tokens
    Buy,
    /// Spend base tokens, receive quote tokens
    Sell,
}

impl TradeSide {
    /// Check if this is the buy direction
    pub fn is_buy(&self) -> bool {
        matches!(self, TradeSide::Buy)
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_side_is_buy() {
        assert!(TradeSide::Buy.is_buy());
        assert!(!TradeSide::Sell.is_buy());
    }

    #[test]
    fn test_trade_side_display() {
        assert_eq!(TradeSide::Buy.to_string(), "buy");
        assert_eq!(TradeSide::Sell.to_string(), "sell");
    }

    #[test]
    fn test_trade_side_serialization() {
        let json = serde_json::to_string(&TradeSide::Buy).unwrap();
        assert_eq!(json, "\"buy\"");

        let parsed: TradeSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(parsed, TradeSide::Sell);
    }
}
