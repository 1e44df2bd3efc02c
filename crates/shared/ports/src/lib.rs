//! Pivot Ports
//!
//! The boundary the decision engine needs from its external collaborators,
//! expressed as capability traits. The market maker, account keeping, and
//! trade execution all live in the surrounding simulation harness; the engine
//! only sees these interfaces.

pub mod account;
pub mod error;
pub mod executor;
pub mod oracle;
pub mod trader;

pub use account::AccountView;
pub use error::{ExecutionError, ExecutionResult};
pub use executor::TradeExecutor;
pub use oracle::PriceOracle;
pub use trader::{Opportunity, Trader};
