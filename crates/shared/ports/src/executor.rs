use pivot_core::{Quantity, Side};

use crate::error::ExecutionResult;

/// Port for the harness's execute callback - the single side-effecting call
/// a trading opportunity may make.
///
/// The harness lends cash or shares automatically when the account cannot
/// cover the trade; borrowing mechanics are entirely its concern. The policy
/// calls this at most once per opportunity.
pub trait TradeExecutor {
    fn execute(&mut self, side: Side, quantity: Quantity) -> ExecutionResult<()>;
}

impl<F> TradeExecutor for F
where
    F: FnMut(Side, Quantity) -> ExecutionResult<()>,
{
    fn execute(&mut self, side: Side, quantity: Quantity) -> ExecutionResult<()> {
        self(side, quantity)
    }
}
