//! Fee density arithmetic.
//!
//! A [`FeeRate`] is a signed fixed-point quantity: rills per 1000 bytes of
//! serialized transaction data. The signed representation lets callers
//! express fee deltas (a bump requirement can be priced against a package
//! that already overshoots the target), and u128/i128 intermediates keep
//! the arithmetic exact for any realistic fee.

use std::fmt;
use std::ops::Add;

/// Fee density in rills per 1000 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FeeRate {
    rills_per_kb: i64,
}

impl FeeRate {
    /// The zero rate.
    pub const ZERO: Self = Self { rills_per_kb: 0 };

    /// Create a fee rate from rills per 1000 bytes.
    pub const fn new(rills_per_kb: i64) -> Self {
        Self { rills_per_kb }
    }

    /// The rate implied by paying `fee` rills for `size` bytes.
    ///
    /// Truncates toward zero. A zero size yields the zero rate rather than
    /// failing.
    pub fn from_fee_and_size(fee: i64, size: usize) -> Self {
        if size == 0 {
            return Self::ZERO;
        }
        let rills_per_kb = (fee as i128 * 1000) / (size as i128);
        Self {
            rills_per_kb: rills_per_kb as i64,
        }
    }

    /// Underlying rate in rills per 1000 bytes.
    pub fn rills_per_kb(&self) -> i64 {
        self.rills_per_kb
    }

    /// Fee in rills this rate implies for `size` bytes.
    ///
    /// `rate * size / 1000`, rounded toward zero — except that a nonzero
    /// rate never prices a nonzero size at exactly zero: the result is
    /// floored away from zero to ±1 rill instead.
    pub fn fee_for_size(&self, size: usize) -> i64 {
        let mut fee = ((self.rills_per_kb as i128 * size as i128) / 1000) as i64;
        if fee == 0 && size != 0 {
            if self.rills_per_kb > 0 {
                fee = 1;
            }
            if self.rills_per_kb < 0 {
                fee = -1;
            }
        }
        fee
    }
}

impl Add for FeeRate {
    type Output = FeeRate;

    fn add(self, other: Self) -> Self::Output {
        FeeRate {
            rills_per_kb: self.rills_per_kb + other.rills_per_kb,
        }
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rills/kB", self.rills_per_kb)
    }
}
