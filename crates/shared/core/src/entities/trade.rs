use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Quantity};

/// One entry of the market-wide trade ledger the harness delivers on every
/// `observe_trades` call. The ledger is cumulative: the harness always sends
/// every trade so far, not just new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Per-unit price the trade executed at
    pub execution_price: Price,
    pub side: Side,
    pub quantity: Quantity,
    /// The market maker's belief immediately before the trade
    pub prior_belief: Price,
}

impl TradeRecord {
    pub fn new(execution_price: Price, side: Side, quantity: Quantity, prior_belief: Price) -> Self {
        Self {
            execution_price,
            side,
            quantity,
            prior_belief,
        }
    }

    /// Returns the notional value of the trade (price * quantity)
    pub fn notional(&self) -> Decimal {
        self.execution_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_notional() {
        let record = TradeRecord::new(dec!(52.5), Side::Buy, 4, dec!(50));
        assert_eq!(record.notional(), dec!(210));
    }
}
