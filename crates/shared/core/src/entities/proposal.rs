use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Profit, Quantity};

/// A sized, directed trade candidate produced by the quantity optimizer.
///
/// Transient: the decision policy consumes it immediately, picking the better
/// of the buy and sell proposals for the current opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeProposal {
    pub side: Side,
    pub quantity: Quantity,
    pub expected_profit: Profit,
}

impl TradeProposal {
    pub fn new(side: Side, quantity: Quantity, expected_profit: Profit) -> Self {
        Self {
            side,
            quantity,
            expected_profit,
        }
    }

    /// A proposal with no position change and no expected profit
    pub fn empty(side: Side) -> Self {
        Self::new(side, 0, Profit::ZERO)
    }

    /// Whether the policy should act on this proposal.
    /// A zero quantity means the search found no beneficial trade.
    pub fn is_executable(&self) -> bool {
        self.quantity > 0
    }
}
