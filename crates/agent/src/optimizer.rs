//! Quantity Optimizer
//!
//! Stride-halving local search for the trade size that maximizes expected
//! profit against the price-impact oracle. The search assumes profit is
//! unimodal in quantity near its starting point; a non-monotonic impact
//! function can leave it at a local optimum. That is a known limitation kept
//! for behavioral parity with the reference agent - do not swap in a
//! different optimizer.

use pivot_core::{Price, Profit, Quantity, Side, TradeProposal};
use pivot_ports::PriceOracle;
use rust_decimal::Decimal;

/// Expected profit of trading `quantity` at the oracle's quoted per-unit
/// price, against the fair-value estimate:
/// buy profit is value received minus cost paid, sell profit is proceeds
/// minus value given up. Quantity 0 never reaches the oracle and is worth 0.
pub fn expected_profit(
    side: Side,
    fair_value: Price,
    oracle: &dyn PriceOracle,
    quantity: Quantity,
) -> Profit {
    if quantity == 0 {
        return Profit::ZERO;
    }
    let qty = Decimal::from(quantity);
    let unit_price = oracle.price_per_unit(side, quantity);
    match side {
        Side::Buy => qty * fair_value - qty * unit_price,
        Side::Sell => qty * unit_price - qty * fair_value,
    }
}

/// Initial quantity and stride for the halving search: half the width of the
/// scan range, which covers twice the number of signals in the current
/// regime but never less than `max_uncertain_quantity`.
pub fn seed_stride(regime_len: usize, max_uncertain_quantity: Quantity) -> Quantity {
    Quantity::max(2 * regime_len as Quantity, max_uncertain_quantity) / 2
}

/// Search the quantity space for the most profitable trade in `side`.
///
/// Starts at `quantity = seed` with stride `seed`; each level halves the
/// stride and explores the feasible neighbors `quantity - stride` and
/// `quantity + stride`, keeping whichever subtree yields the higher profit.
/// A best profit that is not strictly positive collapses to the empty
/// proposal: the policy never trades at a loss or for nothing.
pub fn optimize(
    side: Side,
    fair_value: Price,
    oracle: &dyn PriceOracle,
    seed: Quantity,
) -> TradeProposal {
    if seed == 0 {
        return TradeProposal::empty(side);
    }

    let (quantity, profit) = search(side, fair_value, oracle, seed, seed);
    if profit > Profit::ZERO {
        TradeProposal::new(side, quantity, profit)
    } else {
        TradeProposal::empty(side)
    }
}

/// One level of the halving search. Evaluates the current quantity, then
/// recurses into both neighbors while the stride is positive. Candidates at
/// or below zero are a definite zero-profit base case and are never priced.
fn search(
    side: Side,
    fair_value: Price,
    oracle: &dyn PriceOracle,
    quantity: Quantity,
    stride: Quantity,
) -> (Quantity, Profit) {
    let mut best = (
        quantity,
        expected_profit(side, fair_value, oracle, quantity),
    );
    if stride == 0 {
        return best;
    }

    let half = stride / 2;
    if quantity > stride {
        let below = search(side, fair_value, oracle, quantity - stride, half);
        if below.1 > best.1 {
            best = below;
        }
    }
    let above = search(side, fair_value, oracle, quantity + stride, half);
    if above.1 > best.1 {
        best = above;
    }
    best
}
