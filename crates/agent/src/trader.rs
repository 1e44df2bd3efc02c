//! Decision Policy
//!
//! `JumpTrader` ties the pieces together once per trading opportunity:
//! detector update, fair-value estimate over the current regime, one
//! optimizer run per direction, then at most one execute call for the better
//! of the two. Behavior is a pure function of the accumulated history, so
//! re-running an opportunity without new signals reproduces the decision.

use pivot_core::{Price, Side, Signal, SimulationParams, TradeProposal, TradeRecord};
use pivot_ports::{Opportunity, TradeExecutor, Trader};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::detector::JumpDetector;
use crate::optimizer;
use crate::signal::SignalHistory;

/// Configuration for the jump trader
#[derive(Debug, Clone)]
pub struct JumpTraderConfig {
    /// Moving-average window for the jump detector
    pub window_size: usize,
    /// Minimum moving-average difference magnitude to confirm a jump
    pub jump_threshold: Decimal,
    /// Signals required before any trading logic runs
    pub min_observations: usize,
    /// Floor of the optimizer scan range, for young regimes
    pub max_uncertain_quantity: u64,
    /// Converts the mean belief signal into price units
    pub price_scale: Decimal,
}

impl Default for JumpTraderConfig {
    fn default() -> Self {
        Self {
            window_size: 20,
            jump_threshold: dec!(0.15),
            min_observations: 10,
            max_uncertain_quantity: 20,
            price_scale: dec!(100),
        }
    }
}

/// Jump-aware informed trading agent
pub struct JumpTrader {
    config: JumpTraderConfig,
    history: SignalHistory,
    detector: JumpDetector,
    /// Cumulative market-wide ledger, as last delivered by the harness.
    /// Stored for richer policies; the current decision logic does not read it.
    ledger: Vec<TradeRecord>,
    params: Option<SimulationParams>,
}

impl JumpTrader {
    pub fn new(config: JumpTraderConfig) -> Self {
        let detector = JumpDetector::new(config.window_size, config.jump_threshold);
        Self {
            config,
            history: SignalHistory::new(),
            detector,
            ledger: Vec::new(),
            params: None,
        }
    }

    /// Current belief about the per-share value: mean signal since the last
    /// confirmed jump, scaled to price units.
    pub fn fair_value(&self) -> Price {
        self.history.mean_from(self.detector.baseline()) * self.config.price_scale
    }

    /// Position in history after which the current regime started
    pub fn baseline(&self) -> usize {
        self.detector.baseline()
    }

    pub fn detector(&self) -> &JumpDetector {
        &self.detector
    }

    pub fn observations(&self) -> usize {
        self.history.len()
    }

    /// Run the detector and size both directions, returning the better
    /// proposal. Buy wins profit ties.
    fn decide(&mut self, opportunity: &Opportunity<'_>) -> TradeProposal {
        if let Some(baseline) = self.detector.update(&self.history) {
            log::info!(
                "[{}] Jump detected after {} signals, baseline now {}",
                self.name(),
                self.history.len(),
                baseline
            );
        }

        let fair_value = self.fair_value();
        let regime_len = self.history.len().saturating_sub(self.detector.baseline());
        let seed = optimizer::seed_stride(regime_len, self.config.max_uncertain_quantity);

        let buy = optimizer::optimize(Side::Buy, fair_value, opportunity.oracle, seed);
        let sell = optimizer::optimize(Side::Sell, fair_value, opportunity.oracle, seed);

        log::debug!(
            "[{}] fair={} belief={} buy=({}, {}) sell=({}, {})",
            self.name(),
            fair_value,
            opportunity.market_belief,
            buy.quantity,
            buy.expected_profit,
            sell.quantity,
            sell.expected_profit
        );

        if sell.expected_profit > buy.expected_profit {
            sell
        } else {
            buy
        }
    }
}

impl Default for JumpTrader {
    fn default() -> Self {
        Self::new(JumpTraderConfig::default())
    }
}

impl Trader for JumpTrader {
    fn name(&self) -> &str {
        "jump-trader"
    }

    fn configure(&mut self, params: &SimulationParams) {
        self.history = SignalHistory::new();
        self.detector = JumpDetector::new(self.config.window_size, self.config.jump_threshold);
        self.ledger.clear();
        self.params = Some(params.clone());
        log::info!(
            "[{}] Configured for {} timesteps, {} possible jump locations",
            self.name(),
            params.timesteps,
            params.possible_jump_locations.len()
        );
    }

    fn observe(&mut self, signal: Signal, _time: usize) {
        self.history.record(signal);
    }

    fn observe_trades(&mut self, trades: &[TradeRecord], _time: usize) {
        self.ledger = trades.to_vec();
    }

    fn trading_opportunity(
        &mut self,
        opportunity: &Opportunity<'_>,
        executor: &mut dyn TradeExecutor,
    ) {
        // Too little information to act on
        if self.history.len() < self.config.min_observations {
            return;
        }

        let proposal = self.decide(opportunity);
        if !proposal.is_executable() {
            return;
        }

        match executor.execute(proposal.side, proposal.quantity) {
            Ok(()) => log::info!(
                "[{}] Executed {:?} {} (expected profit {})",
                self.name(),
                proposal.side,
                proposal.quantity,
                proposal.expected_profit
            ),
            // Execution failures end the opportunity quietly; the engine
            // holds no order state to unwind.
            Err(e) => log::warn!("[{}] Execution failed: {}", self.name(), e),
        }
    }
}
