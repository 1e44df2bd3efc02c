//! Trader Capability Interface
//!
//! The harness drives agents through this trait alone; it never depends on a
//! concrete agent type. Hooks are synchronous and must be invoked serially
//! for a given agent instance - the engine holds no locks and is not
//! reentrant.

use pivot_core::{Price, Signal, SimulationParams, TradeRecord};

use crate::account::AccountView;
use crate::executor::TradeExecutor;
use crate::oracle::PriceOracle;

/// Read-only collaborators for one trading opportunity.
///
/// Bundles the queries the harness exposes while an opportunity is open:
/// account state, the price-impact oracle, and the market maker's current
/// belief. The execute callback is passed separately because it is the only
/// mutating call.
pub struct Opportunity<'a> {
    pub account: &'a dyn AccountView,
    pub oracle: &'a dyn PriceOracle,
    /// The market maker's current belief about the underlying value
    pub market_belief: Price,
}

/// Capability trait every agent implementation exposes
pub trait Trader {
    /// Agent name for logging
    fn name(&self) -> &str;

    /// One-time setup before a run; resets all internal state
    fn configure(&mut self, params: &SimulationParams);

    /// Deliver one new belief signal for timestep `time`
    fn observe(&mut self, signal: Signal, time: usize);

    /// Deliver the full cumulative trade ledger at timestep `time`
    fn observe_trades(&mut self, trades: &[TradeRecord], time: usize);

    /// One chance to trade. May query the opportunity freely and call
    /// `executor.execute` at most once.
    fn trading_opportunity(
        &mut self,
        opportunity: &Opportunity<'_>,
        executor: &mut dyn TradeExecutor,
    );
}
