use pivot_core::{Price, Quantity, Side};

/// Port for the market maker's price-impact query.
///
/// Returns the average per-unit price of buying or selling `quantity` shares,
/// reflecting that larger trades move the price. The query is pure: it never
/// moves the market, so the engine may call it any number of times while
/// searching for a trade size.
///
/// Contract: callers never query quantity 0, and the oracle is trusted to
/// return a finite, non-negative price for any quantity >= 1. The engine does
/// not validate the result.
pub trait PriceOracle {
    fn price_per_unit(&self, side: Side, quantity: Quantity) -> Price;
}

/// Closures are accepted anywhere an oracle is, which keeps harness glue and
/// test stubs short.
impl<F> PriceOracle for F
where
    F: Fn(Side, Quantity) -> Price,
{
    fn price_per_unit(&self, side: Side, quantity: Quantity) -> Price {
        self(side, quantity)
    }
}
