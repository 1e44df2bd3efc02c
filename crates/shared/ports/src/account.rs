use pivot_core::Price;

/// Port for the harness's account queries.
///
/// Shares can be negative because the harness lends on demand. The current
/// decision policy never consults the account (it trades on belief alone),
/// but the harness supplies these queries on every opportunity and richer
/// policies need them.
pub trait AccountView {
    /// Cash currently held, in price units
    fn cash(&self) -> Price;

    /// Net shares currently held (negative when borrowed)
    fn shares(&self) -> i64;
}
