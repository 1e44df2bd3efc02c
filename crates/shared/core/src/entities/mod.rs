mod params;
mod proposal;
mod side;
mod trade;

pub use params::SimulationParams;
pub use proposal::TradeProposal;
pub use side::Side;
pub use trade::TradeRecord;
