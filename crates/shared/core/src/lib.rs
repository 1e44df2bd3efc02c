//! Pivot Core Domain
//!
//! Pure domain types for the Pivot trading agent.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Side, SimulationParams, TradeProposal, TradeRecord};
pub use values::{Price, Profit, Quantity, Signal};
