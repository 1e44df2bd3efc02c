use rust_decimal::Decimal;

/// Per-unit price - uses Decimal for precision
pub type Price = Decimal;

/// Trade size in whole shares
/// The simulated market trades integral quantities only
pub type Quantity = u64;

/// One observed belief signal (0 or 1 in the binary-signal market,
/// any numeric value in general)
pub type Signal = Decimal;

/// Expected profit of a candidate trade
pub type Profit = Decimal;
