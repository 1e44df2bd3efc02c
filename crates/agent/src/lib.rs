//! Pivot Agent
//!
//! The decision engine of a jump-aware trading agent for a market-maker
//! simulation. The agent receives noisy binary signals about an unobserved
//! underlying value and, on every trading opportunity:
//!
//! 1. Checks the signal stream for a structural break (a "jump" in the
//!    underlying value) and, if found, discards everything observed before it.
//! 2. Estimates fair value as the mean of the signals since the last jump.
//! 3. Sizes a buy and a sell against the market maker's price-impact oracle
//!    with a stride-halving local search, and executes the better of the two
//!    when it is profitable.
//!
//! ```text
//! signal ──► SignalHistory ──► JumpDetector ──► baseline index
//!                                                    │
//!                                                    ▼
//!                                            fair-value estimate
//!                                                    │
//!                              ┌─────────────────────┤
//!                              ▼                     ▼
//!                        optimize(Buy)         optimize(Sell)
//!                              └──────────┬──────────┘
//!                                         ▼
//!                                    JumpTrader ──► execute (harness)
//! ```
//!
//! Everything is synchronous and allocation-light; the harness drives the
//! agent through the `pivot_ports::Trader` trait, one opportunity at a time.

pub mod detector;
pub mod optimizer;
pub mod signal;
pub mod trader;

// Re-export main types
pub use detector::JumpDetector;
pub use optimizer::{expected_profit, optimize, seed_stride};
pub use signal::SignalHistory;
pub use trader::{JumpTrader, JumpTraderConfig};
