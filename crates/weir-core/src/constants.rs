//! Protocol constants. All monetary values in rills (1 WEIR = 10^8 rills).

pub const COIN: u64 = 100_000_000;

/// Minimum fee for a transaction to be accepted into the pool, in rills.
pub const MIN_TX_FEE: u64 = 1_000;
